//! Configuration viewing and editing from the command line.

use revolut_business::error::{Error, Result};

use crate::cli::{GetConfigCmd, SetConfigCmd};
use crate::config::{Config, Paths};

pub fn get(cfg: &Config, cmd: &GetConfigCmd) {
    match cmd {
        GetConfigCmd::Prod => println!("{}", cfg.production_key),
        GetConfigCmd::Sand => println!("{}", cfg.sandbox_key),
        GetConfigCmd::Api => {
            if cfg.use_sandbox {
                println!("Sandbox is the active API.");
            } else {
                println!("Production is the active API.");
            }
        }
    }
}

pub fn set(cfg: &mut Config, paths: &Paths, cmd: &SetConfigCmd) -> Result<()> {
    match cmd {
        SetConfigCmd::Prod { key } => cfg.set_production_key(key, &paths.config()),
        SetConfigCmd::Sand { key } => cfg.set_sandbox_key(key, &paths.config()),
        SetConfigCmd::Api { which } => {
            if which.starts_with("sand") {
                cfg.use_sandbox = true;
                cfg.save(&paths.config())?;
                println!("API set to sandbox.");
                Ok(())
            } else if which.starts_with("prod") {
                cfg.use_sandbox = false;
                cfg.save(&paths.config())?;
                println!("API set to production.");
                Ok(())
            } else {
                Err(Error::Config(format!("unknown argument {}", which)))
            }
        }
    }
}
