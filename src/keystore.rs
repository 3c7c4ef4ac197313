//! Keystore management for release signing
//!
//! The keystore is checked before every release build and generated on
//! first use with `keytool`, so a fresh checkout can produce a signed
//! APK without manual setup.

use anyhow::{bail, Result};

use crate::config::signing::SigningConfig;
use crate::error::{hints, ApkgoError};
use crate::exec::subprocess::{command_exists, run_command};
use crate::utils::terminal::{print_info, print_success, print_warning};

/// Ensure the signing keystore exists, generating one if absent
pub fn ensure(config: &SigningConfig, verbose: bool) -> Result<()> {
    if config.keystore_path.is_file() {
        print_info("keystore already exists");
        return Ok(());
    }

    if !command_exists("keytool") {
        return Err(
            ApkgoError::missing_tool("keytool", "keystore generation", hints::keytool()).into(),
        );
    }

    print_warning("keystore not found, generating a new one...");

    let args = generation_args(config);
    if verbose {
        // Passwords are among the args; only name the tool and target.
        eprintln!(
            "Running: keytool -genkeypair -keystore {}",
            config.keystore_path.display()
        );
    }

    // keytool prompts for the certificate distinguished name, so the
    // child must share the terminal.
    let result = run_command("keytool", &args)?;
    if !result.success {
        bail!("keytool failed with exit code {}", result.exit_code);
    }

    print_success(&format!(
        "keystore created at {}",
        config.keystore_path.display()
    ));

    Ok(())
}

/// Build the keytool argument list for generating a new key pair
fn generation_args(config: &SigningConfig) -> Vec<String> {
    vec![
        "-genkeypair".to_string(),
        "-keystore".to_string(),
        config.keystore_path.display().to_string(),
        "-storepass".to_string(),
        config.keystore_password.clone(),
        "-keypass".to_string(),
        config.key_password.clone(),
        "-alias".to_string(),
        config.key_alias.clone(),
        "-keyalg".to_string(),
        "RSA".to_string(),
        "-keysize".to_string(),
        "2048".to_string(),
        "-validity".to_string(),
        "10000".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> SigningConfig {
        SigningConfig {
            keystore_path: PathBuf::from("release.keystore"),
            keystore_password: "storepass".to_string(),
            key_password: "keypass".to_string(),
            key_alias: "upload".to_string(),
        }
    }

    #[test]
    fn test_generation_args_layout() {
        let args = generation_args(&test_config());

        assert_eq!(args[0], "-genkeypair");
        assert_eq!(args[1], "-keystore");
        assert_eq!(args[2], "release.keystore");
        assert_eq!(args[4], "storepass");
        assert_eq!(args[6], "keypass");
        assert_eq!(args[8], "upload");
    }

    #[test]
    fn test_generation_args_key_parameters() {
        let args = generation_args(&test_config());
        let joined = args.join(" ");

        assert!(joined.contains("-keyalg RSA"));
        assert!(joined.contains("-keysize 2048"));
        assert!(joined.contains("-validity 10000"));
    }
}
