//! Example data structures for JSON input.

use revolut_business::error::Result;
use revolut_business::models::{Address, ExternalCounterpartyRequest, IndividualName};

/// Print a filled-in external counterparty request to start editing from.
pub fn counterparty() -> Result<()> {
    let use_if = "use if not a company";
    let example = ExternalCounterpartyRequest {
        company: Some("use if not an individual".to_string()),
        individual_name: Some(IndividualName {
            first: use_if.to_string(),
            last: use_if.to_string(),
        }),
        bank_country: "GB".to_string(),
        currency: "GBP".to_string(),
        email: Some("test@sandbox.mars".to_string()),
        phone: Some("+447771234455".to_string()),
        address: Some(Address {
            street1: "15 Credibility Street".to_string(),
            street2: "Canary Wharf".to_string(),
            region: "East End".to_string(),
            city: "London".to_string(),
            country: "GB".to_string(),
            postcode: "E115AB".to_string(),
        }),
        account_no: Some("12345678".to_string()),
        sort_code: Some("1242".to_string()),
        routing_no: Some("666".to_string()),
        iban: Some("iban".to_string()),
        bic: Some("bic/swift".to_string()),
    };

    println!("{}", serde_json::to_string_pretty(&example)?);
    Ok(())
}
