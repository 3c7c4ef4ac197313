//! Release signing configuration
//!
//! The four credentials required to sign a release APK. Resolved once
//! before any build or keystore work so a misconfigured environment
//! fails fast.

use std::path::PathBuf;

use crate::config::env_file::EnvFile;
use crate::error::{hints, ApkgoError};

/// Variable naming the keystore file path
pub const KEYSTORE_PATH: &str = "KEYSTORE_PATH";
/// Variable naming the keystore password
pub const KEYSTORE_PASSWORD: &str = "KEYSTORE_PASSWORD";
/// Variable naming the key password
pub const KEY_PASSWORD: &str = "KEY_PASSWORD";
/// Variable naming the key alias
pub const KEY_ALIAS: &str = "KEY_ALIAS";

/// Immutable signing credentials for the release flow
#[derive(Debug, Clone)]
pub struct SigningConfig {
    /// Path to the keystore file (created if absent)
    pub keystore_path: PathBuf,

    /// Keystore store password
    pub keystore_password: String,

    /// Password for the signing key
    pub key_password: String,

    /// Alias of the signing key inside the keystore
    pub key_alias: String,
}

impl SigningConfig {
    /// Resolve the signing configuration from the environment file and
    /// process environment
    ///
    /// Fails with a configuration error naming every missing variable;
    /// nothing (no build, no keystore access) happens after a failure
    /// here.
    pub fn resolve(env: &EnvFile) -> Result<Self, ApkgoError> {
        let mut missing = Vec::new();

        let mut require = |name: &'static str| match env.var(name) {
            Some(value) => value,
            None => {
                missing.push(name);
                String::new()
            }
        };

        let keystore_path = require(KEYSTORE_PATH);
        let keystore_password = require(KEYSTORE_PASSWORD);
        let key_password = require(KEY_PASSWORD);
        let key_alias = require(KEY_ALIAS);

        if !missing.is_empty() {
            return Err(ApkgoError::config_error_with_hint(
                format!("{} not set", missing.join(", ")),
                hints::signing_config(),
            ));
        }

        Ok(Self {
            keystore_path: PathBuf::from(keystore_path),
            keystore_password,
            key_password,
            key_alias,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_signing_env() {
        for name in [KEYSTORE_PATH, KEYSTORE_PASSWORD, KEY_PASSWORD, KEY_ALIAS] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_resolve_from_env_file() {
        clear_signing_env();

        let env = EnvFile::parse(
            "KEYSTORE_PATH=release.keystore\n\
             KEYSTORE_PASSWORD=storepass\n\
             KEY_PASSWORD=keypass\n\
             KEY_ALIAS=upload\n",
        );

        let config = SigningConfig::resolve(&env).unwrap();
        assert_eq!(config.keystore_path, PathBuf::from("release.keystore"));
        assert_eq!(config.keystore_password, "storepass");
        assert_eq!(config.key_password, "keypass");
        assert_eq!(config.key_alias, "upload");
    }

    #[test]
    #[serial]
    fn test_resolve_reports_all_missing_variables() {
        clear_signing_env();

        let err = SigningConfig::resolve(&EnvFile::parse("")).unwrap_err();
        let message = err.to_string();

        for name in [KEYSTORE_PATH, KEYSTORE_PASSWORD, KEY_PASSWORD, KEY_ALIAS] {
            assert!(message.contains(name), "missing {} in: {}", name, message);
        }
    }

    #[test]
    #[serial]
    fn test_resolve_reports_partial_missing_variables() {
        clear_signing_env();

        let env = EnvFile::parse("KEYSTORE_PATH=release.keystore\nKEY_ALIAS=upload\n");
        let err = SigningConfig::resolve(&env).unwrap_err();
        let message = err.to_string();

        assert!(message.contains(KEYSTORE_PASSWORD));
        assert!(message.contains(KEY_PASSWORD));
        assert!(!message.contains("KEYSTORE_PATH,"));
    }

    #[test]
    #[serial]
    fn test_resolve_falls_back_to_process_env() {
        clear_signing_env();

        std::env::set_var(KEYSTORE_PATH, "env.keystore");
        std::env::set_var(KEYSTORE_PASSWORD, "storepass");
        std::env::set_var(KEY_PASSWORD, "keypass");
        std::env::set_var(KEY_ALIAS, "upload");

        let config = SigningConfig::resolve(&EnvFile::parse("")).unwrap();
        assert_eq!(config.keystore_path, PathBuf::from("env.keystore"));

        clear_signing_env();
    }

    #[test]
    #[serial]
    fn test_empty_value_is_missing() {
        clear_signing_env();

        let env = EnvFile::parse(
            "KEYSTORE_PATH=\n\
             KEYSTORE_PASSWORD=storepass\n\
             KEY_PASSWORD=keypass\n\
             KEY_ALIAS=upload\n",
        );

        let err = SigningConfig::resolve(&env).unwrap_err();
        assert!(err.to_string().contains(KEYSTORE_PATH));
    }
}
