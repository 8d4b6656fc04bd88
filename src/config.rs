//! Application configuration: API keys, the active environment and the
//! persisted request-ID counter.
//!
//! The configuration is an explicit value loaded once at startup and passed
//! by reference into every command handler; mutations save the file before
//! their effect is visible anywhere else.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use revolut_business::api::Client;
use revolut_business::cache::{read_json, write_json};
use revolut_business::error::{Error, Result};
use revolut_business::validation::valid_key;

pub const CONFIG_FILE: &str = "config.json";
pub const ACCOUNTS_FILE: &str = "accounts.json";
pub const DETAILS_FILE: &str = "details.json";
pub const COUNTERPARTIES_FILE: &str = "counterparties.json";

const PROGRAM: &str = "revolut";

/// Locations of the configuration file and the cache files.
#[derive(Debug, Clone)]
pub struct Paths {
    dir: PathBuf,
}

impl Paths {
    /// Resolve the per-user configuration directory, creating it when it
    /// doesn't exist yet. `REVOLUT_CONFIG_DIR` overrides the default of
    /// `~/.config/revolut`.
    pub fn resolve() -> Result<Self> {
        let dir = match std::env::var_os("REVOLUT_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => home::home_dir()
                .ok_or_else(|| Error::Config("couldn't determine the home directory".to_string()))?
                .join(".config")
                .join(PROGRAM),
        };

        fs::create_dir_all(&dir)?;
        Ok(Self::at(dir))
    }

    /// Use a fixed directory instead of the per-user one.
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn config(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn accounts(&self) -> PathBuf {
        self.dir.join(ACCOUNTS_FILE)
    }

    pub fn details(&self) -> PathBuf {
        self.dir.join(DETAILS_FILE)
    }

    pub fn counterparties(&self) -> PathBuf {
        self.dir.join(COUNTERPARTIES_FILE)
    }
}

/// The tool's persisted settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Key for the production API, where changes actually matter.
    #[serde(default)]
    pub production_key: String,
    /// Key for testing and experimenting.
    #[serde(default)]
    pub sandbox_key: String,
    #[serde(rename = "usesandbox", default = "default_use_sandbox")]
    pub use_sandbox: bool,
    /// Counter behind the request IDs handed to transfers and payments.
    #[serde(default)]
    pub last_request: u64,
}

fn default_use_sandbox() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            production_key: String::new(),
            sandbox_key: String::new(),
            use_sandbox: true,
            last_request: 0,
        }
    }
}

impl Config {
    /// Load the configuration, creating a fresh file on first run. A file
    /// that exists but doesn't parse is fatal rather than silently replaced.
    pub fn load_or_create(paths: &Paths) -> Result<Config> {
        let path = paths.config();
        if !path.exists() {
            let cfg = Config::default();
            cfg.save(&path)?;
            warn!(
                "created {}. Set your API keys with 'revolut config set'.",
                path.display()
            );
            return Ok(cfg);
        }

        read_json(&path).map_err(|e| {
            Error::Config(format!("couldn't load {}: {}", path.display(), e))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    /// The key for the currently selected environment.
    pub fn active_key(&self) -> &str {
        if self.use_sandbox {
            &self.sandbox_key
        } else {
            &self.production_key
        }
    }

    /// An API client for the currently selected environment.
    pub fn client(&self) -> Result<Client> {
        Client::new(self.active_key())
    }

    /// Store a production key after checking its format.
    pub fn set_production_key(&mut self, key: &str, path: &Path) -> Result<()> {
        if !valid_key(key) {
            return Err(Error::KeyFormat);
        }
        if !key.starts_with("prod_") {
            return Err(Error::Config("this is not a production key".to_string()));
        }

        self.production_key = key.to_string();
        self.save(path)
    }

    /// Store a sandbox key after checking its format.
    pub fn set_sandbox_key(&mut self, key: &str, path: &Path) -> Result<()> {
        if !valid_key(key) {
            return Err(Error::KeyFormat);
        }
        if !key.starts_with("sand_") {
            return Err(Error::Config("this is not a sandbox key".to_string()));
        }

        self.sandbox_key = key.to_string();
        self.save(path)
    }

    /// Hand out the next request ID for a payment or transfer.
    ///
    /// The counter is bumped and persisted before the ID is returned, so a
    /// crash after this point can never reuse an ID across restarts. The
    /// zero-padded counter keeps the IDs strictly increasing.
    pub fn next_request_id(&mut self, path: &Path) -> Result<String> {
        self.last_request += 1;
        self.save(path)?;
        Ok(format!("{}-{:016}", PROGRAM, self.last_request))
    }
}
