//! Account listing, display and cache refresh.

use revolut_business::cache::{self, AccountCache, DetailsCache};
use revolut_business::error::Result;
use revolut_business::models::{Account, BankDetails};

use crate::cli::ShowOpts;
use crate::config::{Config, Paths};

use super::{display_id, short_time};

/// List accounts, from the caches when they're populated, otherwise from
/// the remote API (filling the caches on the way).
pub async fn list(
    cfg: &Config,
    paths: &Paths,
    opts: &ShowOpts,
    currencies: Option<&str>,
) -> Result<()> {
    let mut accounts = AccountCache::load(&paths.accounts());
    let mut details = DetailsCache::load(&paths.details());

    let listed = if accounts.is_empty() {
        let client = cfg.client()?;
        let list = cache::refresh_accounts(&client, &mut accounts, &mut details).await?;
        accounts.save(&paths.accounts())?;
        details.save(&paths.details())?;
        list
    } else {
        let mut list: Vec<Account> = accounts.values().cloned().collect();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        list
    };

    if opts.details {
        fill_missing_details(cfg, &listed, &mut details, paths).await?;
    }

    println!("Accounts:");
    for account in &listed {
        if !should_display_currency(&account.currency, currencies) {
            continue;
        }

        print_account(account, opts.short);
        if opts.details {
            if let Some(list) = details.get(&account.id) {
                print_details(list);
            }
        }
    }

    Ok(())
}

/// Fetch bank details for any listed account missing from the cache.
async fn fill_missing_details(
    cfg: &Config,
    listed: &[Account],
    details: &mut DetailsCache,
    paths: &Paths,
) -> Result<()> {
    if listed.iter().all(|a| details.contains(&a.id)) {
        return Ok(());
    }

    let client = cfg.client()?;
    for account in listed {
        if !details.contains(&account.id) {
            details.set(account.id.clone(), client.bank_details(&account.id).await?);
        }
    }
    details.save(&paths.details())
}

/// Show one account, from the caches when present. A miss fetches the
/// record and its bank details and stores both for next time.
pub async fn show(cfg: &Config, paths: &Paths, id: &str, opts: &ShowOpts) -> Result<()> {
    let mut accounts = AccountCache::load(&paths.accounts());
    let mut details = DetailsCache::load(&paths.details());

    if !accounts.contains(id) || !details.contains(id) {
        let client = cfg.client()?;
        if !accounts.contains(id) {
            accounts.set(id, client.account(id).await?);
            accounts.save(&paths.accounts())?;
        }
        if !details.contains(id) {
            details.set(id, client.bank_details(id).await?);
            details.save(&paths.details())?;
        }
    }

    if let Some(account) = accounts.get(id) {
        print_account(account, opts.short);
    }
    if let Some(list) = details.get(id) {
        print_details(list);
    }

    Ok(())
}

/// Fetch the account listing and fill the caches for any unknown ID.
/// Already-cached entries are left as they are.
pub async fn update(cfg: &Config, paths: &Paths) -> Result<()> {
    let mut accounts = AccountCache::load(&paths.accounts());
    let mut details = DetailsCache::load(&paths.details());

    let client = cfg.client()?;
    cache::refresh_accounts(&client, &mut accounts, &mut details).await?;

    accounts.save(&paths.accounts())?;
    details.save(&paths.details())?;

    println!("Cached details for {} accounts.", accounts.len());
    Ok(())
}

fn print_account(account: &Account, short: bool) {
    let name = account.name.as_deref().unwrap_or("<unnamed>");
    let state = account.state.as_deref().unwrap_or("-");
    println!(
        "{} ({}): {} - {:.2} {}{}",
        display_id(&account.id, short),
        state,
        name,
        account.balance.unwrap_or(0.0),
        account.currency,
        account
            .updated_at
            .as_deref()
            .map(|t| format!(", updated {}", short_time(t)))
            .unwrap_or_default(),
    );
}

fn print_details(list: &[BankDetails]) {
    for details in list {
        print_line("Account number:", details.account_no.as_deref());
        print_line("Sort code:", details.sort_code.as_deref());
        print_line("IBAN:", details.iban.as_deref());
        print_line("BIC:", details.bic.as_deref());
        print_line("Routing number:", details.routing_no.as_deref());
        print_line("Beneficiary:", Some(&details.beneficiary));
        print_line("Beneficiary address:", Some(&details.address.street1));
        print_line("\t", Some(&details.address.street2));
        print_line("\t", Some(&details.address.postcode));
        print_line("\t", Some(&details.address.city));
        print_line("\t", Some(&details.address.region));
        print_line("\t", Some(&details.address.country));
        print_line("Bank country:", Some(&details.country));
        print_line("Schemes:", Some(&details.schemes.join(", ")));
        print_line("Pooled:", Some(&details.pooled.to_string()));
        print_line("Unique reference:", details.unique_reference.as_deref());
        let eta = format!(
            "{}-{} {}",
            details.estimated_time.min, details.estimated_time.max, details.estimated_time.unit
        );
        print_line("Estimated time:", Some(&eta));
        println!();
    }
}

fn print_line(label: &str, value: Option<impl AsRef<str>>) {
    if let Some(value) = value {
        let value = value.as_ref();
        if !value.is_empty() {
            println!("\t{} {}", label, value);
        }
    }
}

/// Check the currency against the -c comma-separated filter.
fn should_display_currency(currency: &str, list: Option<&str>) -> bool {
    match list {
        None | Some("") => true,
        Some(list) => list.split(',').any(|c| c.trim() == currency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_filter() {
        assert!(should_display_currency("GBP", None));
        assert!(should_display_currency("GBP", Some("")));
        assert!(should_display_currency("GBP", Some("GBP")));
        assert!(should_display_currency("EUR", Some("GBP,EUR")));
        assert!(should_display_currency("EUR", Some("GBP, EUR")));
        assert!(!should_display_currency("USD", Some("GBP,EUR")));
    }
}
