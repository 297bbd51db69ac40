//! Contract automation service for the InfluencerFlow platform.
//!
//! Turns negotiated deal terms into draft influencer marketing agreements
//! and serves the contract template catalogue consumed by the contract
//! editor UI.

pub mod compose;
pub mod id;
pub mod service;
pub mod templates;
pub mod terms;

pub use service::{generate_contract, ContractResult, ContractStatus};
pub use terms::{
    validate, DealTerms, DealTermsPayload, Deliverable, DeliverablePayload,
    GenerateContractRequest, ValidationError,
};
