//! Webhook registration.

use revolut_business::error::{Error, Result};

use crate::config::Config;

pub async fn add(cfg: &Config, url: &str) -> Result<()> {
    if !url.starts_with("https://") {
        return Err(Error::Config(
            "webhook URLs must use https://".to_string(),
        ));
    }

    let client = cfg.client()?;
    client.add_webhook(url).await?;

    println!("Webhook registered.");
    Ok(())
}
