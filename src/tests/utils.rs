use crate::buildium::{BuildiumError, LeaseSource};
use crate::config::{AppConfig, BuildiumConfig};
use crate::domain::{LeaseRecord, PrefixScheme};
use crate::router::App;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Canned lease source standing in for the live Buildium client.
pub struct FixtureLeases(pub Vec<LeaseRecord>);

impl LeaseSource for FixtureLeases {
    fn lease_records(&self) -> Result<Vec<LeaseRecord>, BuildiumError> {
        Ok(self.0.clone())
    }
}

/// Lease source whose fetch always fails.
pub struct FailingLeases;

impl LeaseSource for FailingLeases {
    fn lease_records(&self) -> Result<Vec<LeaseRecord>, BuildiumError> {
        Err(BuildiumError::Network("connection refused".to_string()))
    }
}

pub fn lease(id: i64, name: &str, location: &str, balance: f64) -> LeaseRecord {
    LeaseRecord {
        lease_id: id,
        occupant_name: name.to_string(),
        location: location.to_string(),
        balance,
        lease_end: None,
        property_name: "Visitors Flea Market".to_string(),
    }
}

/// Writes a layout file under the temp dir with a unique name.
pub fn write_layout(tag: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "boothmap_layout_{tag}_{}.json",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&path, json).expect("Failed to write layout fixture");
    path
}

/// A four-booth plane matching the shared end-to-end scenario.
pub fn sample_layout(tag: &str) -> PathBuf {
    write_layout(
        tag,
        r#"{
          "planeWidth": 600,
          "planeHeight": 1000,
          "booths": [
            {"label": "24",  "x": 10,  "y": 10, "width": 40, "height": 40},
            {"label": "10",  "x": 60,  "y": 10, "width": 40, "height": 40},
            {"label": "K1",  "x": 110, "y": 10, "width": 40, "height": 40},
            {"label": "OF9", "x": 160, "y": 10, "width": 40, "height": 40}
          ]
        }"#,
    )
}

pub fn test_app(leases: impl LeaseSource + 'static, layout_path: PathBuf) -> App {
    App {
        cfg: AppConfig {
            buildium: BuildiumConfig {
                client_id: "test-client".to_string(),
                client_secret: "test-secret".to_string(),
                base_url: "http://localhost:9".to_string(),
            },
            property_name: "Visitors Flea Market".to_string(),
            layout_path,
            prefix_scheme: PrefixScheme::Simple,
            bind_addr: "127.0.0.1:0".to_string(),
        },
        leases: Box::new(leases),
    }
}
