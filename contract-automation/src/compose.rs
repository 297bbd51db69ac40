//! Contract text composition.
//!
//! The composer is a pure function of the validated terms, the contract id,
//! the generation timestamp, and the rendering options: identical inputs
//! render a byte-identical document.

use chrono::{DateTime, NaiveDate, Utc};
use shared::Config;

use crate::terms::DealTerms;

/// Render the full agreement text for a set of validated deal terms.
pub fn compose_contract(
    terms: &DealTerms,
    contract_id: &str,
    generated_at: DateTime<Utc>,
    config: &Config,
) -> String {
    let signing_date = format_long_date(terms.start_date);
    let total = currency(terms.total_fee, config);
    let installment = currency(terms.total_fee * 0.5, config);

    let mut doc = String::new();

    doc.push_str(&format!(
        "INFLUENCER MARKETING AGREEMENT\n\n\
         This Influencer Marketing Agreement (\"Agreement\") is entered into on {signing_date} \
         by and between {brand} (\"Brand\") and {influencer} (\"Influencer\").\n",
        brand = terms.brand_name,
        influencer = terms.influencer_name,
    ));

    doc.push_str(&format!(
        "\nCAMPAIGN DETAILS\n\n\
         Campaign: {campaign}\n\
         Platform: {platform}\n\
         Campaign Period: {start} to {end}\n\
         Total Compensation: {total}\n",
        campaign = terms.campaign_name,
        platform = terms.platform,
        start = signing_date,
        end = format_long_date(terms.end_date),
    ));

    doc.push_str(&format!(
        "\nDELIVERABLES\n\n\
         The Influencer agrees to create and publish the following content on {platform}:\n",
        platform = terms.platform,
    ));
    for (index, deliverable) in terms.deliverables.iter().enumerate() {
        doc.push_str(&format!(
            "\n{number}. {kind} (Quantity: {quantity})\n\
             \x20  Description: {description}\n\
             \x20  Due Date: {due}\n",
            number = index + 1,
            kind = deliverable.kind,
            quantity = deliverable.quantity,
            description = deliverable.description,
            due = format_long_date(deliverable.due_date),
        ));
    }

    doc.push_str(&format!(
        "\nCOMPENSATION\n\n\
         The Brand shall pay the Influencer a total fee of {total} for the services \
         described above, payable as follows:\n\
         - 50% ({installment}) due upon signing of this Agreement\n\
         - 50% ({installment}) due upon completion of all deliverables\n",
    ));

    doc.push_str(&format!(
        "\nCONTENT GUIDELINES\n\n\
         All content must comply with {platform} community guidelines and applicable FTC \
         disclosure requirements. Sponsored content must be clearly identified with #ad or \
         #sponsored. The Brand shall have 48 hours to review and approve each deliverable \
         prior to publication.\n",
        platform = terms.platform,
    ));

    doc.push_str(
        "\nINTELLECTUAL PROPERTY\n\n\
         The Influencer retains ownership of all content created under this Agreement. The \
         Brand is granted a non-exclusive, worldwide license to reuse and promote the content \
         across its marketing channels for the duration of the campaign and six months \
         thereafter.\n",
    );

    doc.push_str(
        "\nCONFIDENTIALITY\n\n\
         Both parties shall keep the terms of this Agreement and any non-public information \
         exchanged during the campaign confidential.\n",
    );

    doc.push_str(
        "\nTERMINATION\n\n\
         Either party may terminate this Agreement with 14 days written notice. Upon \
         termination, the Influencer shall be compensated pro rata for deliverables completed \
         and approved before the termination date.\n",
    );

    doc.push_str(&format!(
        "\nGOVERNING LAW\n\n\
         This Agreement shall be governed by and construed in accordance with the laws of \
         {law}.\n",
        law = config.governing_law,
    ));

    doc.push_str(&format!(
        "\nSIGNATURES\n\n\
         Brand: {brand}\n\
         Signature: ____________________\n\
         Date: {signing_date}\n\n\
         Influencer: {influencer}\n\
         Signature: ____________________\n\
         Date: {signing_date}\n",
        brand = terms.brand_name,
        influencer = terms.influencer_name,
    ));

    doc.push_str(&format!(
        "\n--------------------------------------------------\n\
         Contract ID: {contract_id}\n\
         Generated: {generated}\n",
        generated = generated_at.to_rfc3339(),
    ));

    doc
}

/// Format a date in long form, e.g. "August 1, 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a monetary amount: thousands grouping, up to three fraction
/// digits with trailing zeros trimmed.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let rendered = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some(parts) => parts,
        None => (rendered.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn currency(amount: f64, config: &Config) -> String {
    format!("{}{}", config.currency_symbol, format_amount(amount))
}
