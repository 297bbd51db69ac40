//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(
    status: u16,
    data: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(serde_json::to_string(data)?))?)
}

/// Create an error response with the given status code and message.
pub fn error_response(
    status: u16,
    message: impl Into<String>,
) -> Result<Response<Body>, lambda_http::Error> {
    json_response(
        status,
        &ErrorBody {
            error: message.into(),
        },
    )
}

/// Parse a request body as JSON into the expected envelope shape.
pub fn parse_json_body<T: DeserializeOwned>(body: &Body) -> crate::error::Result<T> {
    serde_json::from_slice(body.as_ref()).map_err(|e| Error::MalformedRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Envelope {
        name: String,
    }

    #[test]
    fn test_parse_json_body() {
        let body = Body::from(r#"{"name":"EcoStyle Apparel"}"#);
        let parsed: Envelope = parse_json_body(&body).unwrap();
        assert_eq!(parsed.name, "EcoStyle Apparel");
    }

    #[test]
    fn test_parse_json_body_rejects_bad_json() {
        let body = Body::from("not json");
        let err = parse_json_body::<Envelope>(&body).unwrap_err();
        assert!(matches!(err, Error::MalformedRequest(_)));
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "Not found".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Not found"}"#
        );
    }
}
