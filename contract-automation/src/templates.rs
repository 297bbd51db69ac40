//! Contract template catalogue.
//!
//! The static registry of agreement templates the contract editor offers.
//! Generation itself always renders the standard agreement; the other
//! entries describe what each template requires so the editor can build its
//! forms.

use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Standard,
    Exclusive,
    OneTime,
    Ongoing,
    Nda,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    UnitedStates,
    EuropeanUnion,
    UnitedKingdom,
    International,
}

/// One entry in the template catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub template_id: String,
    pub name: String,
    pub description: String,
    pub required_fields: Vec<String>,
    pub optional_fields: Vec<String>,
    pub contract_type: ContractType,
    pub jurisdictions: Vec<Jurisdiction>,
}

/// Placeholder-filled sample for the editor's preview pane.
#[derive(Debug, Serialize)]
pub struct TemplatePreview {
    pub template_id: String,
    pub sample_data: serde_json::Value,
    pub required_fields: Vec<String>,
    pub optional_fields: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The available contract templates.
pub fn available_templates() -> Vec<TemplateInfo> {
    vec![
        TemplateInfo {
            template_id: "standard_contract".to_string(),
            name: "Standard Influencer Marketing Agreement".to_string(),
            description: "Basic influencer marketing contract for single campaign collaborations"
                .to_string(),
            required_fields: strings(&[
                "brand_name",
                "influencer_name",
                "platform",
                "campaign_name",
                "start_date",
                "end_date",
                "deliverables",
                "total_fee",
            ]),
            optional_fields: strings(&[
                "brand_address",
                "influencer_address",
                "handle",
                "payment_schedule",
                "exclusivity_clause",
                "usage_rights_duration",
            ]),
            contract_type: ContractType::Standard,
            jurisdictions: vec![Jurisdiction::UnitedStates, Jurisdiction::International],
        },
        TemplateInfo {
            template_id: "exclusive_contract".to_string(),
            name: "Exclusive Brand Partnership Agreement".to_string(),
            description: "Long-term exclusive partnership contract with comprehensive terms"
                .to_string(),
            required_fields: strings(&[
                "brand_name",
                "influencer_name",
                "platform",
                "exclusivity_period",
                "minimum_deliverables",
                "total_fee",
            ]),
            optional_fields: strings(&[
                "performance_bonuses",
                "renewal_options",
                "territory_restrictions",
            ]),
            contract_type: ContractType::Exclusive,
            jurisdictions: vec![
                Jurisdiction::UnitedStates,
                Jurisdiction::EuropeanUnion,
                Jurisdiction::International,
            ],
        },
        TemplateInfo {
            template_id: "nda_contract".to_string(),
            name: "Non-Disclosure Agreement".to_string(),
            description: "Confidentiality agreement for sensitive brand collaborations"
                .to_string(),
            required_fields: strings(&[
                "brand_name",
                "influencer_name",
                "confidential_information_scope",
                "nda_duration",
            ]),
            optional_fields: strings(&["permitted_disclosures", "return_of_materials"]),
            contract_type: ContractType::Nda,
            jurisdictions: vec![
                Jurisdiction::UnitedStates,
                Jurisdiction::EuropeanUnion,
                Jurisdiction::UnitedKingdom,
                Jurisdiction::International,
            ],
        },
    ]
}

/// Look up a template by id.
pub fn find_template(template_id: &str) -> Option<TemplateInfo> {
    available_templates()
        .into_iter()
        .find(|t| t.template_id == template_id)
}

/// Build the preview payload for a template, or `None` if the id is
/// unknown.
pub fn template_preview(template_id: &str) -> Option<TemplatePreview> {
    let template = find_template(template_id)?;

    let sample_data = json!({
        "brand_name": "[Brand Name]",
        "influencer_name": "[Influencer Name]",
        "platform": "[Platform]",
        "campaign_name": "[Campaign Name]",
        "start_date": "[Start Date]",
        "end_date": "[End Date]",
        "total_fee": "[Total Fee]",
        "deliverables": [
            {
                "type": "[Deliverable Type]",
                "description": "[Deliverable Description]",
                "quantity": "[Quantity]",
                "due_date": "[Due Date]"
            }
        ]
    });

    Some(TemplatePreview {
        template_id: template.template_id,
        sample_data,
        required_fields: template.required_fields,
        optional_fields: template.optional_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_entries() {
        let templates = available_templates();
        let ids: Vec<&str> = templates.iter().map(|t| t.template_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["standard_contract", "exclusive_contract", "nda_contract"]
        );
    }

    #[test]
    fn test_standard_template_required_fields() {
        let standard = find_template("standard_contract").unwrap();
        assert_eq!(
            standard.required_fields,
            vec![
                "brand_name",
                "influencer_name",
                "platform",
                "campaign_name",
                "start_date",
                "end_date",
                "deliverables",
                "total_fee",
            ]
        );
        assert_eq!(standard.contract_type, ContractType::Standard);
    }

    #[test]
    fn test_unknown_template_is_none() {
        assert!(find_template("celebrity_contract").is_none());
        assert!(template_preview("celebrity_contract").is_none());
    }

    #[test]
    fn test_preview_echoes_template_fields() {
        let preview = template_preview("nda_contract").unwrap();
        assert_eq!(preview.template_id, "nda_contract");
        assert_eq!(preview.required_fields[2], "confidential_information_scope");
        assert_eq!(preview.sample_data["brand_name"], "[Brand Name]");
        assert_eq!(
            preview.sample_data["deliverables"][0]["type"],
            "[Deliverable Type]"
        );
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(ContractType::OneTime).unwrap(),
            "one_time"
        );
        assert_eq!(
            serde_json::to_value(Jurisdiction::UnitedStates).unwrap(),
            "united_states"
        );
        assert_eq!(
            serde_json::to_value(Jurisdiction::EuropeanUnion).unwrap(),
            "european_union"
        );
    }
}
