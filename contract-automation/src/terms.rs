//! Deal terms: wire payloads, validated domain types, and validation rules.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// Wire format for all calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Envelope for POST /v1/contracts/generate.
#[derive(Debug, Deserialize)]
pub struct GenerateContractRequest {
    pub deal_terms: DealTermsPayload,
}

/// Raw deal terms as sent by the contract editor.
///
/// Fields default when absent so that an incomplete payload reaches the
/// validator and comes back as a 400 with the proper rule message instead
/// of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct DealTermsPayload {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub influencer_name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub campaign_name: String,
    #[serde(default)]
    pub total_fee: f64,
    #[serde(default)]
    pub deliverables: Vec<DeliverablePayload>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// One piece of content owed under the deal, as sent on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct DeliverablePayload {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub due_date: String,
}

fn default_quantity() -> u32 {
    1
}

/// Validated deal terms. Constructed only by [`validate`]; validity is
/// all-or-nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct DealTerms {
    pub brand_name: String,
    pub influencer_name: String,
    pub platform: String,
    pub campaign_name: String,
    pub total_fee: f64,
    pub deliverables: Vec<Deliverable>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A validated deliverable.
#[derive(Debug, Clone, PartialEq)]
pub struct Deliverable {
    pub kind: String,
    pub description: String,
    pub quantity: u32,
    pub due_date: NaiveDate,
}

/// A deal-terms rule violation. The `Display` text is the exact message
/// surfaced to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Invalid date format")]
    InvalidDateFormat,

    #[error("End date must be after start date")]
    EndBeforeStart,

    #[error("At least one deliverable is required")]
    NoDeliverables,

    #[error("Invalid deliverable due date")]
    InvalidDeliverableDueDate,

    #[error("Deliverable due date must be within campaign period")]
    DueDateOutsideCampaign,
}

/// Check a raw payload against the deal-terms rules, converting it into the
/// typed domain form. Stops at the first violated rule.
///
/// `campaign_name` and `total_fee` are intentionally not rejected here; the
/// contract editor form enforces the fuller rule set before submitting.
pub fn validate(payload: DealTermsPayload) -> Result<DealTerms, ValidationError> {
    if payload.brand_name.trim().is_empty()
        || payload.influencer_name.trim().is_empty()
        || payload.platform.trim().is_empty()
    {
        return Err(ValidationError::MissingRequiredFields);
    }

    let start_date =
        parse_date(&payload.start_date).ok_or(ValidationError::InvalidDateFormat)?;
    let end_date = parse_date(&payload.end_date).ok_or(ValidationError::InvalidDateFormat)?;

    if end_date < start_date {
        return Err(ValidationError::EndBeforeStart);
    }

    if payload.deliverables.is_empty() {
        return Err(ValidationError::NoDeliverables);
    }

    let mut deliverables = Vec::with_capacity(payload.deliverables.len());
    for deliverable in payload.deliverables {
        let due_date = parse_date(&deliverable.due_date)
            .ok_or(ValidationError::InvalidDeliverableDueDate)?;

        // Bounds are inclusive: a deliverable due on the first or last day
        // of the campaign is in range.
        if due_date < start_date || due_date > end_date {
            return Err(ValidationError::DueDateOutsideCampaign);
        }

        deliverables.push(Deliverable {
            kind: deliverable.kind,
            description: deliverable.description,
            quantity: deliverable.quantity,
            due_date,
        });
    }

    Ok(DealTerms {
        brand_name: payload.brand_name,
        influencer_name: payload.influencer_name,
        platform: payload.platform,
        campaign_name: payload.campaign_name,
        total_fee: payload.total_fee,
        deliverables,
        start_date,
        end_date,
    })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
