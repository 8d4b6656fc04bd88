//! File-backed lookup caches for accounts, bank details and counterparties.
//!
//! Each cache is an independent ID-keyed map persisted as one indented JSON
//! file. Loading is fail-open: a missing or corrupt file logs a warning and
//! yields an empty store. Saving is fail-closed: a failed write aborts the
//! calling command, and every save rewrites the whole file so a partial
//! write can never leave a half-patched structure behind.
//!
//! No referential integrity is enforced between the three caches; the bank
//! details cache may hold entries for account IDs the account cache has
//! never seen. Entries are never refreshed or evicted until the user clears
//! the cache files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::Client;
use crate::error::Result;
use crate::models::{Account, BankDetails, Counterparty};

/// Cached basic account records, keyed by account ID.
pub type AccountCache = Cache<Account>;
/// Cached bank detail lists, keyed by account ID.
pub type DetailsCache = Cache<Vec<BankDetails>>;
/// Cached counterparties, keyed by counterparty ID.
pub type CounterpartyCache = Cache<Counterparty>;

/// An ID-keyed store persisted as a single JSON object.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cache<V> {
    entries: HashMap<String, V>,
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> Cache<V>
where
    V: Serialize + DeserializeOwned,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a cache from disk. Missing or unreadable files are not an
    /// error; the command proceeds with a clean slate and refetches.
    pub fn load(path: &Path) -> Self {
        match read_json(path) {
            Ok(cache) => cache,
            Err(e) => {
                warn!(
                    "couldn't load cache {}: {}. Proceeding with clean slate.",
                    path.display(),
                    e
                );
                Self::new()
            }
        }
    }

    /// Save the cache to disk as one whole-file rewrite.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        self.entries.get(id)
    }

    pub fn set(&mut self, id: impl Into<String>, value: V) {
        self.entries.insert(id.into(), value);
    }

    pub fn remove(&mut self, id: &str) -> Option<V> {
        self.entries.remove(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry IDs in sorted order, for stable listings.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

/// Fetch the remote account listing and fill both account caches for any ID
/// not already present. Existing entries are left untouched.
///
/// Returns the remote listing so callers can display fresh balances without
/// a second round trip.
pub async fn refresh_accounts(
    client: &Client,
    accounts: &mut AccountCache,
    details: &mut DetailsCache,
) -> Result<Vec<Account>> {
    let list = client.accounts().await?;

    for account in &list {
        if !accounts.contains(&account.id) {
            accounts.set(account.id.clone(), account.clone());
        }
        if !details.contains(&account.id) {
            let fetched = client.bank_details(&account.id).await?;
            details.set(account.id.clone(), fetched);
        }
    }

    Ok(list)
}

/// Fetch the remote counterparty listing and insert any counterparty whose
/// ID is absent from the cache. Existing entries are left untouched.
pub async fn refresh_counterparties(
    client: &Client,
    cache: &mut CounterpartyCache,
) -> Result<Vec<Counterparty>> {
    let list = client.counterparties().await?;

    for counterparty in &list {
        if !cache.contains(&counterparty.id) {
            cache.set(counterparty.id.clone(), counterparty.clone());
        }
    }

    Ok(list)
}

/// Load and decode one JSON file into a structure.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

/// Encode a structure as indented JSON and write it with owner-only
/// permissions. The write replaces the previous file contents entirely.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_vec_pretty(value)?;
    fs::write(path, data)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, EstimatedTime};

    fn details_entry() -> Vec<BankDetails> {
        vec![
            BankDetails {
                iban: None,
                bic: None,
                account_no: Some("12345678".to_string()),
                sort_code: Some("223344".to_string()),
                routing_no: None,
                beneficiary: "Test Org".to_string(),
                address: Address {
                    street1: "1 Canada Square".to_string(),
                    city: "London".to_string(),
                    country: "GB".to_string(),
                    postcode: "E14 5AB".to_string(),
                    ..Default::default()
                },
                country: "GB".to_string(),
                pooled: false,
                unique_reference: None,
                schemes: vec!["bacs".to_string(), "faster_payments".to_string()],
                estimated_time: EstimatedTime {
                    unit: "hours".to_string(),
                    min: 0,
                    max: 12,
                },
            },
            BankDetails {
                iban: Some("GB29NWBK60161331926819".to_string()),
                bic: Some("NWBKGB2L".to_string()),
                account_no: None,
                sort_code: None,
                routing_no: None,
                beneficiary: "Test Org".to_string(),
                address: Address::default(),
                country: "GB".to_string(),
                pooled: true,
                unique_reference: Some("AB 12 34".to_string()),
                schemes: vec!["swift".to_string()],
                estimated_time: EstimatedTime {
                    unit: "days".to_string(),
                    min: 1,
                    max: 3,
                },
            },
        ]
    }

    #[test]
    fn test_round_trip_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("details.json");

        let cache = DetailsCache::new();
        cache.save(&path).unwrap();

        let loaded = DetailsCache::load(&path);
        assert_eq!(loaded, cache);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_round_trip_single_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");

        let mut cache = AccountCache::new();
        cache.set(
            "acc-1",
            Account {
                id: "acc-1".to_string(),
                name: Some("Main".to_string()),
                balance: Some(10.5),
                currency: "GBP".to_string(),
                state: Some("active".to_string()),
                public: Some(false),
                created_at: Some("2020-01-11T12:22:53.12Z".to_string()),
                updated_at: None,
                kind: None,
            },
        );
        cache.save(&path).unwrap();

        let loaded = AccountCache::load(&path);
        assert_eq!(loaded, cache);
        assert_eq!(loaded.get("acc-1").unwrap().balance, Some(10.5));
    }

    #[test]
    fn test_round_trip_nested_details() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("details.json");

        let mut cache = DetailsCache::new();
        cache.set("acc-1", details_entry());
        cache.save(&path).unwrap();

        let loaded = DetailsCache::load(&path);
        assert_eq!(loaded, cache);
        assert_eq!(loaded.get("acc-1").unwrap().len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = AccountCache::load(&dir.path().join("nope.json"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        fs::write(&path, b"{not json at all").unwrap();

        let cache = AccountCache::load(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_sorted_ids() {
        let mut cache: Cache<u32> = Cache::new();
        cache.set("b", 2);
        cache.set("a", 1);
        cache.set("c", 3);
        assert_eq!(cache.sorted_ids(), vec!["a", "b", "c"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        AccountCache::new().save(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
