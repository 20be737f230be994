//! Configuration validation
//!
//! Validates critical configuration values at startup to catch
//! misconfigurations early, before any connection is opened.

use anyhow::Result;
use catedra_core::Config;

pub fn validate_config(config: &Config) -> Result<()> {
    if config.db_max_connections == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    if config.max_upload_size_bytes == 0 {
        return Err(anyhow::anyhow!("Max upload size cannot be 0"));
    }

    // The gate rejects everything without a secret; the process still starts
    // so the public read path keeps working.
    if config.professor_password.is_none() {
        tracing::warn!(
            "PROFESSOR_PASSWORD not configured - all mutating requests will be rejected"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server_port: 3000,
            cors_origins: vec!["*".to_string()],
            database_url: "postgres://localhost/catedra".to_string(),
            db_max_connections: 10,
            db_timeout_seconds: 30,
            professor_password: Some("secret".to_string()),
            storage_backend: None,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            local_storage_path: None,
            local_storage_base_url: None,
            max_upload_size_bytes: 25 * 1024 * 1024,
            request_timeout_seconds: 60,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn zero_connections_is_rejected() {
        let mut config = base_config();
        config.db_max_connections = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn zero_upload_limit_is_rejected() {
        let mut config = base_config();
        config.max_upload_size_bytes = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn missing_secret_is_tolerated() {
        let mut config = base_config();
        config.professor_password = None;
        assert!(validate_config(&config).is_ok());
    }
}
