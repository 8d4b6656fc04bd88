//! Payments to counterparties and transaction history.

use revolut_business::api::TransactionFilter;
use revolut_business::error::{Error, Result};
use revolut_business::models::{PaymentRequest, Receiver, TransactionStatus};
use revolut_business::validation::valid_transaction_type;

use crate::cli::{SendArgs, ShowOpts};
use crate::config::{Config, Paths};

use super::{display_id, short_time};

pub async fn send(cfg: &mut Config, paths: &Paths, args: &SendArgs) -> Result<()> {
    let client = cfg.client()?;
    let request_id = cfg.next_request_id(&paths.config())?;
    let currency = args.currency.to_uppercase();

    println!(
        "Paying {:.2} {} with ID {}.",
        args.amount, currency, request_id
    );

    let request = PaymentRequest {
        request_id,
        account_id: args.from.clone(),
        receiver: Receiver {
            counterparty_id: args.counterparty.clone(),
            account_id: args.receiver_account.clone(),
        },
        amount: args.amount,
        currency,
        reference: args.reference.clone(),
        schedule_for: args.schedule.clone(),
    };
    let response = client.pay(&request).await?;

    match response.state.as_str() {
        "declined" | "failed" => println!(
            "Payment {} {}: {}",
            response.id,
            response.state,
            response.reason.as_deref().unwrap_or("no reason given")
        ),
        _ => println!("Status of {}: {}", response.id, response.state),
    }

    Ok(())
}

/// List transactions with the optional filters applied remotely.
pub async fn list(
    cfg: &Config,
    opts: &ShowOpts,
    count: Option<u32>,
    kind: Option<String>,
    from: Option<String>,
    to: Option<String>,
    counterparty: Option<String>,
) -> Result<()> {
    if let Some(kind) = kind.as_deref() {
        if !valid_transaction_type(kind) {
            return Err(Error::Config(format!(
                "unknown transaction type '{}'",
                kind
            )));
        }
    }

    let filter = TransactionFilter {
        count,
        kind,
        from,
        to,
        counterparty,
    };

    let client = cfg.client()?;
    let transactions = client.transactions(&filter).await?;

    if transactions.is_empty() {
        println!("No transactions to list.");
        return Ok(());
    }

    for tx in &transactions {
        print_transaction(tx, opts.short);
        if opts.details {
            print_legs(tx, opts.short);
        }
    }

    Ok(())
}

pub async fn show(cfg: &Config, id: &str, opts: &ShowOpts) -> Result<()> {
    let client = cfg.client()?;
    let tx = client.transaction(id).await?;

    print_transaction(&tx, opts.short);
    print_legs(&tx, opts.short);
    if let Some(request_id) = &tx.request_id {
        println!("\tRequest ID: {}", request_id);
    }
    if let Some(scheduled) = &tx.scheduled_for {
        println!("\tScheduled for: {}", short_time(scheduled));
    }
    if let Some(merchant) = &tx.merchant {
        println!("\tMerchant: {} ({})", merchant.name, merchant.country);
    }

    Ok(())
}

pub async fn cancel(cfg: &Config, id: &str) -> Result<()> {
    let client = cfg.client()?;
    client.cancel_transaction(id).await?;

    println!("Transaction cancelled.");
    Ok(())
}

fn print_transaction(tx: &TransactionStatus, short: bool) {
    let amount = tx
        .legs
        .first()
        .map(|leg| format!("{:.2} {}", leg.amount, leg.currency))
        .unwrap_or_else(|| "-".to_string());

    let mut line = format!(
        "{} {} ({}, {}): {}",
        short_time(&tx.created_at),
        display_id(&tx.id, short),
        tx.kind,
        tx.state,
        amount,
    );
    if let Some(reference) = &tx.reference {
        line.push_str(" - ");
        line.push_str(reference);
    }
    if let Some(reason) = &tx.reason {
        line.push_str(&format!(" [{}]", reason));
    }
    println!("{}", line);
}

fn print_legs(tx: &TransactionStatus, short: bool) {
    for leg in &tx.legs {
        let mut line = format!(
            "\t{}: {:.2} {} on {}",
            display_id(&leg.id, short),
            leg.amount,
            leg.currency,
            display_id(&leg.account_id, short),
        );
        if let (Some(bill_amount), Some(bill_currency)) = (leg.bill_amount, &leg.bill_currency) {
            line.push_str(&format!(" (billed {:.2} {})", bill_amount, bill_currency));
        }
        if let Some(description) = &leg.description {
            line.push_str(" - ");
            line.push_str(description);
        }
        println!("{}", line);
    }
}
