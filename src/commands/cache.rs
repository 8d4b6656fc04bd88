//! Cache manipulation.

use std::fs;

use revolut_business::error::Result;

use crate::config::Paths;

/// Remove all three cache files. The next listing command refetches.
pub fn clear(paths: &Paths) -> Result<()> {
    for path in [paths.accounts(), paths.details(), paths.counterparties()] {
        if path.exists() {
            println!("Removing {}", path.display());
            fs::remove_file(&path)?;
        }
    }

    println!("Cleared all caches.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use revolut_business::cache::AccountCache;

    #[test]
    fn test_clear_removes_only_cache_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::at(dir.path().to_path_buf());

        AccountCache::new().save(&paths.accounts()).unwrap();
        AccountCache::new().save(&paths.details()).unwrap();
        Config::default().save(&paths.config()).unwrap();

        clear(&paths).unwrap();

        assert!(!paths.accounts().exists());
        assert!(!paths.details().exists());
        assert!(!paths.counterparties().exists());
        // The configuration survives a cache clear.
        assert!(paths.config().exists());
    }
}
