use std::{fmt, io::Error, path::PathBuf};

use chrono::Utc;

use crate::types::StoredToken;

#[derive(Debug)]
pub enum TokenError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for TokenError {
    fn from(err: Error) -> Self {
        TokenError::IoError(err)
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::SerdeError(err)
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::IoError(e) => write!(f, "{}", e),
            TokenError::SerdeError(e) => write!(f, "{}", e),
        }
    }
}

/// Persists the single bearer token the whole application runs on.
///
/// The implicit-grant flow hands out a plain access token with no refresh
/// token, so there is nothing to renew here. The token lives until an API
/// call reports it unauthorized, at which point it is cleared and the user
/// has to run `tunecli auth` again.
pub struct TokenStore {
    token: StoredToken,
}

impl TokenStore {
    pub fn new(access_token: String) -> Self {
        TokenStore {
            token: StoredToken {
                access_token,
                obtained_at: Utc::now().timestamp() as u64,
            },
        }
    }

    pub async fn load() -> Result<Self, TokenError> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path).await?;
        let token: StoredToken = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), TokenError> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Removes the persisted token file. Missing file counts as cleared.
    pub async fn clear() -> Result<(), TokenError> {
        let path = Self::token_path();
        match async_fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenError::IoError(e)),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn obtained_at(&self) -> u64 {
        self.token.obtained_at
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tunecli/cache/token.json");
        path
    }
}
