/*
 * Responsibility
 * - 環境変数から認証まわりの設定を読む (API_KEY_REALM)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;

use crate::services::auth::API_KEY_SCHEME;

const DEFAULT_REALM: &str = "api";

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    // new() を通さずに作らせない (challenge が header にそのまま入るため)
    realm: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            realm: DEFAULT_REALM.to_string(),
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `from_env` without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let realm = lookup("API_KEY_REALM").unwrap_or_else(|| DEFAULT_REALM.to_string());
        Self::new(realm)
    }

    pub fn new(realm: impl Into<String>) -> Result<Self, ConfigError> {
        let realm = realm.into();
        if realm.trim().is_empty() {
            return Err(ConfigError::Invalid("API_KEY_REALM"));
        }
        // quoted-string にそのまま埋め込むので、エスケープが要る文字は拒否
        let valid = realm
            .bytes()
            .all(|b| (b == b' ' || b.is_ascii_graphic()) && b != b'"' && b != b'\\');
        if !valid {
            return Err(ConfigError::Invalid("API_KEY_REALM"));
        }
        Ok(Self { realm })
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// `WWW-Authenticate` value sent with 401 responses.
    pub fn challenge(&self) -> String {
        format!("{} realm=\"{}\"", API_KEY_SCHEME, self.realm)
    }
}
