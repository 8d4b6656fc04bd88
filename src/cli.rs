//! Command-line declarations for the `revolut` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Revolut for Business from the command line.
#[derive(Parser, Debug)]
#[command(name = "revolut", version)]
#[command(about = "Revolut for Business from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Account details.
    #[command(subcommand, alias = "acc")]
    Account(AccountCmd),

    /// Counterparty listing and management.
    #[command(subcommand, alias = "cp")]
    Counterparty(CounterpartyCmd),

    /// Transfer between your own accounts.
    #[command(alias = "tr")]
    Transfer(TransferArgs),

    /// Payments and transactions.
    #[command(subcommand, name = "payments", alias = "pay")]
    Payments(PaymentCmd),

    /// Webhook management.
    #[command(subcommand, name = "webhooks", alias = "web")]
    Webhooks(WebhookCmd),

    /// Application configuration.
    #[command(subcommand, alias = "cfg")]
    Config(ConfigCmd),

    /// Cache manipulation.
    #[command(subcommand)]
    Cache(CacheCmd),

    /// Print example data structures for JSON input.
    #[command(subcommand)]
    Json(JsonCmd),
}

/// Display options shared by every listing command.
#[derive(Args, Debug, Default)]
pub struct ShowOpts {
    /// Shorten IDs for display purposes.
    #[arg(short, long = "shorten")]
    pub short: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,
}

#[derive(Subcommand, Debug)]
pub enum AccountCmd {
    /// List accounts. They will be loaded from the cache if available.
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        opts: ShowOpts,

        /// List only this comma-separated list of currencies.
        #[arg(short, long, value_name = "CURRENCIES")]
        currencies: Option<String>,
    },

    /// Show one account by ID. It will be loaded from the cache if available.
    Show {
        #[command(flatten)]
        opts: ShowOpts,

        /// UUID of the account to show.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Refresh the account and bank details caches.
    #[command(alias = "up")]
    Update,
}

#[derive(Subcommand, Debug)]
pub enum CounterpartyCmd {
    /// List counterparties. Will fetch from the cache if available.
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        opts: ShowOpts,
    },

    /// Update the counterparty cache.
    #[command(alias = "up")]
    Update,

    /// Get a counterparty by UUID. Will fetch from the cache if available.
    Get {
        #[command(flatten)]
        opts: ShowOpts,

        /// Output the raw JSON instead of formatted text.
        #[arg(short, long)]
        json: bool,

        /// UUID of the counterparty.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Add a new counterparty.
    #[command(subcommand)]
    Add(AddCounterpartyCmd),

    /// Delete a counterparty.
    #[command(alias = "del", alias = "rm")]
    Delete {
        /// UUID of the counterparty to delete.
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddCounterpartyCmd {
    /// Add an existing Revolut user as a new counterparty.
    #[command(alias = "rev")]
    Revolut {
        /// The counterparty is a business account. Will be personal if unspecified.
        #[arg(short, long)]
        business: bool,

        /// Name for a personal account.
        #[arg(short, long, value_name = "PERSONAL NAME")]
        name: Option<String>,

        /// Phone number for a personal account.
        #[arg(short, long, value_name = "PHONE NUMBER")]
        phone: Option<String>,

        /// E-mail for an admin of a business account.
        #[arg(short, long, value_name = "E-MAIL")]
        email: Option<String>,
    },

    /// Add an external bank account as a new counterparty.
    #[command(alias = "ex")]
    External {
        /// JSON file to load details from. Use the 'json' tool command to
        /// show an example to start from.
        #[arg(value_name = "FILENAME")]
        filename: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Optional reference to show on the transaction.
    #[arg(short, long, value_name = "TEXT")]
    pub reference: Option<String>,

    /// UUID of the account to transfer from.
    #[arg(value_name = "SOURCE ID")]
    pub from: String,

    /// UUID of the account to transfer to.
    #[arg(value_name = "DEST ID")]
    pub to: String,

    /// Amount to transfer.
    #[arg(value_name = "AMOUNT")]
    pub amount: f64,

    /// Currency to transfer in.
    #[arg(value_name = "CURRENCY")]
    pub currency: String,
}

#[derive(Subcommand, Debug)]
pub enum PaymentCmd {
    /// Send a payment to a counterparty.
    Send(SendArgs),

    /// List payment/transaction history with optional filters.
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        opts: ShowOpts,

        /// Maximum number of transactions to list.
        #[arg(long, value_name = "COUNT")]
        count: Option<u32>,

        /// Only list transactions of this type.
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// List transactions from this ISO date.
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// List transactions up to this ISO date.
        #[arg(long, value_name = "DATE")]
        to: Option<String>,

        /// Only list transactions involving this counterparty UUID.
        #[arg(long, value_name = "ID")]
        counterparty: Option<String>,
    },

    /// Show one transaction by ID.
    Show {
        #[command(flatten)]
        opts: ShowOpts,

        /// UUID of the transaction to show.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Cancel a scheduled transaction.
    Cancel {
        /// UUID of the transaction to cancel.
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Optional reference to show on the transaction.
    #[arg(short, long, value_name = "TEXT")]
    pub reference: Option<String>,

    /// ISO date/time to schedule the payment for.
    #[arg(long, value_name = "TIME")]
    pub schedule: Option<String>,

    /// Pay into this specific account of the counterparty.
    #[arg(long = "account", value_name = "ACCOUNT ID")]
    pub receiver_account: Option<String>,

    /// UUID of the account to pay from.
    #[arg(value_name = "SOURCE ID")]
    pub from: String,

    /// UUID of the counterparty to pay.
    #[arg(value_name = "COUNTERPARTY ID")]
    pub counterparty: String,

    /// Amount to pay.
    #[arg(value_name = "AMOUNT")]
    pub amount: f64,

    /// Currency to pay in.
    #[arg(value_name = "CURRENCY")]
    pub currency: String,
}

#[derive(Subcommand, Debug)]
pub enum WebhookCmd {
    /// Register a URL to receive transaction events.
    Add {
        /// HTTPS URL the events get posted to.
        #[arg(value_name = "URL")]
        url: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Show configuration options.
    #[command(subcommand)]
    Get(GetConfigCmd),

    /// Set configuration options.
    #[command(subcommand)]
    Set(SetConfigCmd),
}

#[derive(Subcommand, Debug)]
pub enum GetConfigCmd {
    /// Show the production API key.
    Prod,
    /// Show the sandbox API key.
    Sand,
    /// Show which API is used.
    Api,
}

#[derive(Subcommand, Debug)]
pub enum SetConfigCmd {
    /// Set the production API key.
    Prod {
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Set the sandbox API key.
    Sand {
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Set the API to use when commands are run.
    Api {
        /// "sandbox" or "production".
        #[arg(value_name = "API")]
        which: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheCmd {
    /// Clear all caches.
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum JsonCmd {
    /// Print the input JSON for external counterparties.
    #[command(alias = "cp")]
    Counterparty,
}
