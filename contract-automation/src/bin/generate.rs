//! Contract Generation Lambda - Turns negotiated deal terms into a draft
//! agreement.
//!
//! Endpoints:
//! - POST /v1/contracts/generate - Generate a draft contract
//! - GET /health - Health check

use contract_automation::terms::GenerateContractRequest;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, json_response, parse_json_body};
use shared::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    config: Config,
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str();
    let path = event.uri().path();

    info!("Contract request: {} {}", method, path);

    match (method, path) {
        ("POST", "/v1/contracts/generate") => {
            // A body that does not match the envelope shape is not
            // client-correctable input, so it gets the generic 500, not a
            // validation 400. The cause only goes to the logs.
            let request: GenerateContractRequest = match parse_json_body(event.body()) {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!("Rejected contract request: {}", e);
                    return error_response(500, "Failed to generate contract");
                }
            };

            match contract_automation::generate_contract(request.deal_terms, &state.config) {
                Ok(result) => json_response(200, &result),
                Err(e) if e.status_code() < 500 => error_response(e.status_code(), e.to_string()),
                Err(e) => {
                    error!("Contract generation failed: {}", e);
                    error_response(500, "Failed to generate contract")
                }
            }
        }

        ("GET", "/health") => json_response(
            200,
            &serde_json::json!({
                "status": "healthy",
                "service": "contract-automation",
            }),
        ),

        _ => error_response(404, "Not found"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState {
        config: Config::from_env(),
    });
    let state_clone = state.clone();

    run(service_fn(move |event| {
        let state = state_clone.clone();
        async move { handler(state, event).await }
    }))
    .await
}
