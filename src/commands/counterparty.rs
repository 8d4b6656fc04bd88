//! Counterparty listing, lookup and management.

use std::fs;
use std::path::Path;

use revolut_business::cache::{self, CounterpartyCache};
use revolut_business::error::{Error, Result};
use revolut_business::models::{
    Counterparty, ExternalCounterpartyRequest, InternalCounterpartyRequest,
};

use crate::cli::ShowOpts;
use crate::config::{Config, Paths};

use super::{display_id, short_time};

/// List counterparties, from the cache when it's populated.
pub async fn list(cfg: &Config, paths: &Paths, opts: &ShowOpts) -> Result<()> {
    let mut cache = CounterpartyCache::load(&paths.counterparties());

    if cache.is_empty() {
        let client = cfg.client()?;
        cache::refresh_counterparties(&client, &mut cache).await?;
        cache.save(&paths.counterparties())?;
    }

    if cache.is_empty() {
        println!("No counterparties to list.");
        return Ok(());
    }

    if cache.len() == 1 {
        println!("1 counterparty:");
    } else {
        println!("{} counterparties:", cache.len());
    }

    for id in cache.sorted_ids() {
        if let Some(counterparty) = cache.get(id) {
            print_counterparty(counterparty, opts.short, opts.details);
        }
    }

    Ok(())
}

/// Fetch the counterparty listing and cache any counterparty not yet known.
/// Entries already cached keep their stored form.
pub async fn update(cfg: &Config, paths: &Paths) -> Result<()> {
    let mut cache = CounterpartyCache::load(&paths.counterparties());

    let client = cfg.client()?;
    cache::refresh_counterparties(&client, &mut cache).await?;
    cache.save(&paths.counterparties())?;

    println!("Cached {} counterparties.", cache.len());
    Ok(())
}

/// Show one counterparty, from the cache when present.
pub async fn get(cfg: &Config, paths: &Paths, id: &str, opts: &ShowOpts, json: bool) -> Result<()> {
    let mut cache = CounterpartyCache::load(&paths.counterparties());

    if !cache.contains(id) {
        let client = cfg.client()?;
        cache.set(id, client.counterparty(id).await?);
        cache.save(&paths.counterparties())?;
    }

    if let Some(counterparty) = cache.get(id) {
        if json {
            println!("{}", serde_json::to_string_pretty(counterparty)?);
        } else {
            print_counterparty(counterparty, opts.short, opts.details);
        }
    }

    Ok(())
}

/// Add an existing Revolut user as a counterparty.
pub async fn add_revolut(
    cfg: &Config,
    paths: &Paths,
    business: bool,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let request = if business {
        if email.is_none() {
            return Err(Error::Config(
                "e-mail is required for business accounts".to_string(),
            ));
        }
        InternalCounterpartyRequest {
            profile_type: "business".to_string(),
            email,
            ..Default::default()
        }
    } else {
        if name.is_none() {
            return Err(Error::Config(
                "a name is required for a personal account".to_string(),
            ));
        }
        if phone.is_none() {
            return Err(Error::Config(
                "a phone number is required for a personal account".to_string(),
            ));
        }
        InternalCounterpartyRequest {
            profile_type: "personal".to_string(),
            name,
            phone,
            ..Default::default()
        }
    };

    let client = cfg.client()?;
    let counterparty = client.add_counterparty(&request).await?;
    remember(paths, &counterparty)?;

    println!("Counterparty {} added successfully.", counterparty.id);
    Ok(())
}

/// Add an external bank account as a counterparty, from a JSON file in the
/// shape `revolut json counterparty` prints.
pub async fn add_external(cfg: &Config, paths: &Paths, filename: &Path) -> Result<()> {
    let data = fs::read(filename)
        .map_err(|e| Error::Config(format!("no such file: {}: {}", filename.display(), e)))?;
    let request: ExternalCounterpartyRequest = serde_json::from_slice(&data)?;

    let client = cfg.client()?;
    let counterparty = client.add_external_counterparty(&request).await?;
    remember(paths, &counterparty)?;

    println!("Counterparty {} added successfully.", counterparty.id);
    Ok(())
}

/// Delete a counterparty remotely, then drop it from the cache.
pub async fn delete(cfg: &Config, paths: &Paths, id: &str) -> Result<()> {
    let client = cfg.client()?;
    client.delete_counterparty(id).await?;

    let mut cache = CounterpartyCache::load(&paths.counterparties());
    if cache.remove(id).is_some() {
        cache.save(&paths.counterparties())?;
    }

    println!("Counterparty deleted.");
    Ok(())
}

fn remember(paths: &Paths, counterparty: &Counterparty) -> Result<()> {
    let mut cache = CounterpartyCache::load(&paths.counterparties());
    cache.set(counterparty.id.clone(), counterparty.clone());
    cache.save(&paths.counterparties())
}

fn print_counterparty(counterparty: &Counterparty, short: bool, details: bool) {
    println!(
        "{} ({}): {} ({}), updated {}",
        display_id(&counterparty.id, short),
        counterparty.profile_type.as_deref().unwrap_or("external"),
        counterparty.name,
        counterparty.country.as_deref().unwrap_or("-"),
        short_time(&counterparty.updated_at),
    );

    if !details || counterparty.accounts.is_empty() {
        return;
    }

    println!("\tBank details:");
    for account in &counterparty.accounts {
        println!(
            "\t{} ({}, {})",
            display_id(&account.id, short),
            account.kind,
            account.currency
        );
        if account.kind == "external" {
            print_line("Name:", account.name.as_deref());
            print_line("Account no.:", account.account_no.as_deref());
            print_line("Sort code:", account.sort_code.as_deref());
            print_line("IBAN:", account.iban.as_deref());
            print_line("BIC:", account.bic.as_deref());
            print_line("E-mail:", account.email.as_deref());
            print_line("Bank country:", account.country.as_deref());
            print_line("Charges:", account.recipient_charges.as_deref());
        }
    }
}

fn print_line(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            println!("\t\t{} {}", label, value);
        }
    }
}
