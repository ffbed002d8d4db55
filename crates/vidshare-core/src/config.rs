//! Configuration module
//!
//! Server configuration loaded from the environment (and `.env` via dotenvy).
//! Storage settings are grouped in `StorageConfig`; an unset `STORAGE_BACKEND`
//! is a valid configuration in which uploads answer "Storage bucket not configured".

use std::env;

use crate::constants::{
    BYTES_PER_MB, DEFAULT_AD_LINK, DEFAULT_MAX_UPLOAD_SIZE_MB, DEFAULT_PORT,
    DEFAULT_PUBLIC_DOMAIN, DEFAULT_S3_REGION, DEFAULT_STATIC_DIR,
};
use crate::storage_types::StorageBackend;

/// Storage backend selection and its settings
#[derive(Clone, Debug, Default)]
pub struct StorageConfig {
    pub backend: Option<StorageBackend>,
    pub s3_bucket: Option<String>,
    pub s3_region: String,
    // Custom endpoint for S3-compatible providers (R2, MinIO)
    pub s3_endpoint: Option<String>,
    pub account_id: Option<String>,
    pub public_domain: String,
    /// Overrides the derived public URL base for every backend
    pub public_base_url: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
}

impl StorageConfig {
    /// Base URL that object keys are appended to when building public links.
    ///
    /// Order: explicit override, local base URL (local backend), then the
    /// `https://pub-<account-id>.<public-domain>` bucket convention.
    pub fn public_base_url(&self) -> Option<String> {
        if let Some(base) = &self.public_base_url {
            return Some(base.trim_end_matches('/').to_string());
        }

        match self.backend {
            Some(StorageBackend::Local) => self
                .local_storage_base_url
                .as_ref()
                .map(|base| base.trim_end_matches('/').to_string()),
            Some(StorageBackend::Memory) => Some(format!(
                "https://pub-{}.{}",
                self.account_id.as_deref().unwrap_or("local"),
                self.public_domain
            )),
            Some(StorageBackend::S3) => self
                .account_id
                .as_ref()
                .map(|id| format!("https://pub-{}.{}", id, self.public_domain)),
            None => None,
        }
    }

    /// Endpoint used for the S3 client; R2 accounts get their default endpoint
    pub fn resolved_s3_endpoint(&self) -> Option<String> {
        self.s3_endpoint.clone().or_else(|| {
            self.account_id
                .as_ref()
                .map(|id| format!("https://{}.r2.cloudflarestorage.com", id))
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let Some(backend) = self.backend else {
            return Ok(());
        };

        match backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET must be set when using S3 storage backend"
                    ));
                }
                if self.public_base_url().is_none() {
                    return Err(anyhow::anyhow!(
                        "STORAGE_ACCOUNT_ID or STORAGE_PUBLIC_BASE_URL must be set when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
                if self.public_base_url().is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when using local storage backend"
                    ));
                }
            }
            StorageBackend::Memory => {}
        }

        Ok(())
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub static_dir: String,
    pub max_upload_size_mb: u64,
    pub ad_link: String,
    pub storage: StorageConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let storage_backend = match var("STORAGE_BACKEND") {
            Some(value) => Some(value.parse::<StorageBackend>()?),
            None => None,
        };

        let config = Config {
            server_port: var("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
            environment: var("ENVIRONMENT")
                .or_else(|| var("APP_ENV"))
                .unwrap_or_else(|| "development".to_string()),
            static_dir: var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            max_upload_size_mb: var("MAX_UPLOAD_SIZE_MB")
                .unwrap_or_else(|| DEFAULT_MAX_UPLOAD_SIZE_MB.to_string())
                .parse()
                .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB),
            ad_link: var("AD_LINK")
                .or_else(|| var("ADSTERRA_LINK"))
                .unwrap_or_else(|| DEFAULT_AD_LINK.to_string()),
            storage: StorageConfig {
                backend: storage_backend,
                s3_bucket: var("S3_BUCKET"),
                s3_region: var("S3_REGION").unwrap_or_else(|| DEFAULT_S3_REGION.to_string()),
                s3_endpoint: var("S3_ENDPOINT"),
                account_id: var("STORAGE_ACCOUNT_ID"),
                public_domain: var("STORAGE_PUBLIC_DOMAIN")
                    .unwrap_or_else(|| DEFAULT_PUBLIC_DOMAIN.to_string()),
                public_base_url: var("STORAGE_PUBLIC_BASE_URL"),
                local_storage_path: var("LOCAL_STORAGE_PATH"),
                local_storage_base_url: var("LOCAL_STORAGE_BASE_URL"),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_upload_size_mb == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }
        self.storage.validate()
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn max_upload_size_bytes(&self) -> u64 {
        self.max_upload_size_mb * BYTES_PER_MB
    }

    /// Human-readable limit, e.g. "100MB"
    pub fn max_upload_size_label(&self) -> String {
        format!("{}MB", self.max_upload_size_mb)
    }

    pub fn storage_backend(&self) -> Option<StorageBackend> {
        self.storage.backend
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            max_upload_size_mb: DEFAULT_MAX_UPLOAD_SIZE_MB,
            ad_link: DEFAULT_AD_LINK.to_string(),
            storage: StorageConfig {
                s3_region: DEFAULT_S3_REGION.to_string(),
                public_domain: DEFAULT_PUBLIC_DOMAIN.to_string(),
                ..StorageConfig::default()
            },
        }
    }
}
