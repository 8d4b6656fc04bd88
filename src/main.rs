//! Revolut for Business command-line tool.
//!
//! Thin adapter over the `revolut_business` client library: parses
//! subcommands, loads the configuration and caches, and formats the results
//! for humans. Logs go to stderr; command output goes to stdout.

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::{AccountCmd, Cli, Command, ConfigCmd, CounterpartyCmd, PaymentCmd, WebhookCmd};
use config::{Config, Paths};
use revolut_business::error::{Error, Result};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        match e {
            Error::Api { status, ref message } if message.is_empty() => {
                error!("API error (status {})", status)
            }
            e => error!("{}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let paths = Paths::resolve()?;
    let mut cfg = Config::load_or_create(&paths)?;

    match cli.command {
        Command::Account(cmd) => match cmd {
            AccountCmd::List { opts, currencies } => {
                commands::account::list(&cfg, &paths, &opts, currencies.as_deref()).await
            }
            AccountCmd::Show { opts, id } => {
                commands::account::show(&cfg, &paths, &id, &opts).await
            }
            AccountCmd::Update => commands::account::update(&cfg, &paths).await,
        },

        Command::Counterparty(cmd) => match cmd {
            CounterpartyCmd::List { opts } => {
                commands::counterparty::list(&cfg, &paths, &opts).await
            }
            CounterpartyCmd::Update => commands::counterparty::update(&cfg, &paths).await,
            CounterpartyCmd::Get { opts, json, id } => {
                commands::counterparty::get(&cfg, &paths, &id, &opts, json).await
            }
            CounterpartyCmd::Add(add) => match add {
                cli::AddCounterpartyCmd::Revolut {
                    business,
                    name,
                    phone,
                    email,
                } => {
                    commands::counterparty::add_revolut(&cfg, &paths, business, name, phone, email)
                        .await
                }
                cli::AddCounterpartyCmd::External { filename } => {
                    commands::counterparty::add_external(&cfg, &paths, &filename).await
                }
            },
            CounterpartyCmd::Delete { id } => {
                commands::counterparty::delete(&cfg, &paths, &id).await
            }
        },

        Command::Transfer(args) => commands::transfer::run(&mut cfg, &paths, &args).await,

        Command::Payments(cmd) => match cmd {
            PaymentCmd::Send(args) => commands::payment::send(&mut cfg, &paths, &args).await,
            PaymentCmd::List {
                opts,
                count,
                kind,
                from,
                to,
                counterparty,
            } => commands::payment::list(&cfg, &opts, count, kind, from, to, counterparty).await,
            PaymentCmd::Show { opts, id } => commands::payment::show(&cfg, &id, &opts).await,
            PaymentCmd::Cancel { id } => commands::payment::cancel(&cfg, &id).await,
        },

        Command::Webhooks(cmd) => match cmd {
            WebhookCmd::Add { url } => commands::webhook::add(&cfg, &url).await,
        },

        Command::Config(cmd) => match cmd {
            ConfigCmd::Get(get) => {
                commands::config::get(&cfg, &get);
                Ok(())
            }
            ConfigCmd::Set(set) => commands::config::set(&mut cfg, &paths, &set),
        },

        Command::Cache(cli::CacheCmd::Clear) => commands::cache::clear(&paths),

        Command::Json(cli::JsonCmd::Counterparty) => commands::json::counterparty(),
    }
}
