//! Media storage and static file settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::env::EnvSnapshot;
use crate::error::ConfigResult;
use crate::secret::Secret;

#[derive(Debug, Deserialize)]
struct CloudinaryEnv {
    cloud_name: Option<String>,
    api_key: Option<String>,
    api_secret: Option<Secret>,
}

/// Credentials for the Cloudinary media backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: Secret,
}

/// Uploaded-media handling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaSettings {
    /// URL prefix for uploaded media.
    pub media_url: String,
    /// `None` when the credential set is incomplete. Media uploads degrade;
    /// the service still starts. Contrast with `DATABASE_URL`, which is fatal.
    pub cloudinary: Option<CloudinaryCredentials>,
}

impl MediaSettings {
    pub fn resolve(env: &EnvSnapshot) -> ConfigResult<Self> {
        let raw: CloudinaryEnv = envy::prefixed("CLOUDINARY_").from_iter(env.iter_owned())?;

        let cloudinary = match (raw.cloud_name, raw.api_key, raw.api_secret) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryCredentials {
                cloud_name,
                api_key,
                api_secret,
            }),
            (cloud_name, api_key, api_secret) => {
                let missing: Vec<&str> = [
                    ("CLOUDINARY_CLOUD_NAME", cloud_name.is_none()),
                    ("CLOUDINARY_API_KEY", api_key.is_none()),
                    ("CLOUDINARY_API_SECRET", api_secret.is_none()),
                ]
                .iter()
                .filter(|(_, absent)| *absent)
                .map(|(name, _)| *name)
                .collect();
                tracing::warn!(
                    missing = ?missing,
                    "cloudinary credentials not fully set, media uploads disabled"
                );
                None
            }
        };

        Ok(Self {
            media_url: "/media/".to_string(),
            cloudinary,
        })
    }
}

/// Locations for collected and source static assets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticFileSettings {
    pub static_url: String,
    /// Where collected assets are served from.
    pub static_root: PathBuf,
    /// Source directories assets are collected out of.
    pub source_dirs: Vec<PathBuf>,
}

impl StaticFileSettings {
    pub fn for_base_dir(base_dir: &Path) -> Self {
        Self {
            static_url: "/static/".to_string(),
            static_root: base_dir.join("staticfiles"),
            source_dirs: vec![base_dir.join("static")],
        }
    }
}
