use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

const TOKEN_FILE: &str = "auth_token";

#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("Token store IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence for the session bearer token, with two tiers behind one
/// abstraction:
///
/// - durable: a file under the config dir, surviving restarts ("remember me")
/// - ephemeral: an in-process slot, gone when the process exits
///
/// `load()` checks the durable tier first, then the ephemeral one. A missing
/// token is never an error.
pub struct TokenStore {
    dir: PathBuf,
    ephemeral: Option<String>,
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ephemeral: None,
        }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(config.config_dir.clone())
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    /// Save a token into the tier selected by `durable`.
    ///
    /// Writing to one tier clears the other, so `load()` always resolves to
    /// the most recent login.
    pub fn save(&mut self, token: &str, durable: bool) -> Result<(), TokenStoreError> {
        if durable {
            std::fs::create_dir_all(&self.dir)?;
            std::fs::write(self.token_path(), token)?;
            self.ephemeral = None;
            info!("Session token saved (durable)");
        } else {
            self.clear_durable()?;
            self.ephemeral = Some(token.to_string());
            info!("Session token saved (ephemeral)");
        }
        Ok(())
    }

    /// Read the persisted token: durable tier first, then ephemeral.
    pub fn load(&self) -> Option<String> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(token) if !token.trim().is_empty() => return Some(token.trim().to_string()),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to read durable token file: {e}"),
        }
        self.ephemeral.clone()
    }

    /// Remove the token from both tiers. Missing entries are fine.
    pub fn clear(&mut self) -> Result<(), TokenStoreError> {
        self.clear_durable()?;
        self.ephemeral = None;
        Ok(())
    }

    fn clear_durable(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenStoreError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_none_when_nothing_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn durable_token_survives_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TokenStore::new(dir.path());
        store.save("tok-durable", true).unwrap();

        let reopened = TokenStore::new(dir.path());
        assert_eq!(reopened.load(), Some("tok-durable".to_string()));
    }

    #[test]
    fn ephemeral_token_is_lost_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TokenStore::new(dir.path());
        store.save("tok-ephemeral", false).unwrap();
        assert_eq!(store.load(), Some("tok-ephemeral".to_string()));

        let reopened = TokenStore::new(dir.path());
        assert_eq!(reopened.load(), None);
    }

    #[test]
    fn saving_a_tier_clears_the_other() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TokenStore::new(dir.path());

        store.save("tok-a", true).unwrap();
        store.save("tok-b", false).unwrap();
        // Durable tier was cleared by the ephemeral save, so a fresh
        // instance sees nothing.
        assert_eq!(store.load(), Some("tok-b".to_string()));
        assert_eq!(TokenStore::new(dir.path()).load(), None);

        store.save("tok-c", true).unwrap();
        assert_eq!(store.load(), Some("tok-c".to_string()));
    }

    #[test]
    fn clear_removes_both_tiers() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TokenStore::new(dir.path());
        store.save("tok-1", true).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);

        store.save("tok-2", false).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_tolerates_missing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TokenStore::new(dir.path());
        assert!(store.clear().is_ok());
    }
}
