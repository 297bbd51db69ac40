//! Contract generation pipeline: validate, compose, envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use shared::{Config, Error, Result};

use crate::compose::compose_contract;
use crate::id::new_contract_id;
use crate::terms::{validate, DealTermsPayload};

/// Lifecycle state of a generated contract. This pipeline only ever emits
/// drafts; promotion to `final` happens downstream of this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Draft,
    Final,
}

/// Response body for a successfully generated contract.
#[derive(Debug, Serialize)]
pub struct ContractResult {
    pub contract_text: String,
    pub contract_id: String,
    pub status: ContractStatus,
    pub generated_at: DateTime<Utc>,
}

/// Run the full generation pipeline for one request.
///
/// Single-shot and stateless: nothing is persisted, nothing is retried, and
/// apart from the generated id and timestamp the output depends only on the
/// payload and config.
pub fn generate_contract(payload: DealTermsPayload, config: &Config) -> Result<ContractResult> {
    let terms = validate(payload).map_err(|e| Error::Validation(e.to_string()))?;

    let contract_id = new_contract_id();
    let generated_at = Utc::now();
    let contract_text = compose_contract(&terms, &contract_id, generated_at, config);

    info!(
        "Generated draft contract {} for {} / {}",
        contract_id, terms.brand_name, terms.influencer_name
    );

    Ok(ContractResult {
        contract_text,
        contract_id,
        status: ContractStatus::Draft,
        generated_at,
    })
}
