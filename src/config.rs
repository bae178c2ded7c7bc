// src/config.rs

use crate::domain::PrefixScheme;
use std::env;
use std::path::PathBuf;

/// Credentials and endpoint for the Buildium API collaborator.
/// Passed into `BuildiumClient::new` instead of living as module globals.
#[derive(Debug, Clone)]
pub struct BuildiumConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
}

/// Everything `main` needs to wire the app, read once from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub buildium: BuildiumConfig,
    /// Leases are filtered to this property before the map pipeline runs.
    pub property_name: String,
    pub layout_path: PathBuf,
    pub prefix_scheme: PrefixScheme,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let client_id = env::var("BUILDIUM_CLIENT_ID")
            .map_err(|_| "BUILDIUM_CLIENT_ID environment variable not set".to_string())?;
        let client_secret = env::var("BUILDIUM_CLIENT_SECRET")
            .map_err(|_| "BUILDIUM_CLIENT_SECRET environment variable not set".to_string())?;

        let base_url = env::var("BUILDIUM_BASE_URL")
            .unwrap_or_else(|_| "https://api.buildium.com/v1".to_string());

        let property_name = env::var("BOOTHMAP_PROPERTY")
            .unwrap_or_else(|_| "Visitors Flea Market".to_string());

        let layout_path = PathBuf::from(
            env::var("BOOTHMAP_LAYOUT").unwrap_or_else(|_| "map_layout.json".to_string()),
        );

        let prefix_scheme = PrefixScheme::from_config(
            &env::var("BOOTHMAP_PREFIX_SCHEME").unwrap_or_default(),
        );

        let bind_addr =
            env::var("BOOTHMAP_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        Ok(AppConfig {
            buildium: BuildiumConfig {
                client_id,
                client_secret,
                base_url,
            },
            property_name,
            layout_path,
            prefix_scheme,
            bind_addr,
        })
    }
}
