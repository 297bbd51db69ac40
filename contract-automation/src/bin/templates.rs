//! Contract Templates Lambda - Serves the template catalogue to the
//! contract editor.
//!
//! Endpoints:
//! - GET /v1/contracts/templates - List available templates
//! - GET /v1/contracts/templates/{id}/preview - Placeholder preview for a template
//! - GET /health - Health check

use contract_automation::templates::{available_templates, template_preview};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, json_response};
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str();
    let path = event.uri().path();

    info!("Template request: {} {}", method, path);

    match (method, path) {
        ("GET", "/v1/contracts/templates") => json_response(200, &available_templates()),

        _ if path.starts_with("/v1/contracts/templates/") && path.ends_with("/preview") => {
            if method != "GET" {
                return error_response(405, "Method not allowed");
            }

            let template_id = path
                .trim_start_matches("/v1/contracts/templates/")
                .trim_end_matches("/preview");

            match template_preview(template_id) {
                Some(preview) => json_response(200, &preview),
                None => error_response(404, format!("Template not found: {}", template_id)),
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

    run(service_fn(handler)).await
}
