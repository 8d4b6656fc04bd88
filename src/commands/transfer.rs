//! Transfers between the business's own accounts.

use revolut_business::error::Result;
use revolut_business::models::TransferRequest;

use crate::cli::TransferArgs;
use crate::config::{Config, Paths};

pub async fn run(cfg: &mut Config, paths: &Paths, args: &TransferArgs) -> Result<()> {
    let client = cfg.client()?;
    let request_id = cfg.next_request_id(&paths.config())?;
    let currency = args.currency.to_uppercase();

    println!(
        "Transferring {:.2} {} with ID {}.",
        args.amount, currency, request_id
    );

    let request = TransferRequest {
        request_id,
        source_account_id: args.from.clone(),
        target_account_id: args.to.clone(),
        amount: args.amount,
        currency,
        reference: args.reference.clone(),
    };
    let response = client.transfer(&request).await?;

    println!("Status of {}: {}", response.id, response.state);
    Ok(())
}
