// client.rs
use crate::buildium::api_error::BuildiumError;
use crate::buildium::models::{Lease, OutstandingBalance, RentalProperty, RentalUnit};
use crate::config::BuildiumConfig;
use rand::Rng;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const PAGE_LIMIT: usize = 100;

pub struct BuildiumClient {
    cfg: BuildiumConfig,
    client: Client,
}

impl BuildiumClient {
    pub fn new(cfg: BuildiumConfig) -> Result<Self, BuildiumError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| BuildiumError::Network(e.to_string()))?;

        Ok(Self { cfg, client })
    }

    pub fn fetch_all_leases(&self) -> Result<Vec<Lease>, BuildiumError> {
        self.fetch_paginated("leases", &[("leasestatuses", "Active")])
    }

    pub fn fetch_outstanding_balances(&self) -> Result<Vec<OutstandingBalance>, BuildiumError> {
        self.fetch_paginated("leases/outstandingbalances", &[("leasestatuses", "Active")])
    }

    pub fn fetch_all_units(&self) -> Result<Vec<RentalUnit>, BuildiumError> {
        self.fetch_paginated("rentals/units", &[])
    }

    pub fn fetch_all_properties(&self) -> Result<Vec<RentalProperty>, BuildiumError> {
        self.fetch_paginated("rentals", &[])
    }

    /// Walks an endpoint with offset/limit pages until a short batch.
    fn fetch_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> Result<Vec<T>, BuildiumError> {
        let mut all = Vec::new();
        let mut offset = 0;

        loop {
            let batch: Vec<T> = self.fetch_page(path, offset, extra)?;
            let count = batch.len();
            all.extend(batch);

            if count < PAGE_LIMIT {
                break;
            }
            offset += PAGE_LIMIT;
        }

        eprintln!("📄 {path}: fetched {} records", all.len());
        Ok(all)
    }

    fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        offset: usize,
        extra: &[(&str, &str)],
    ) -> Result<Vec<T>, BuildiumError> {
        const MAX_ATTEMPTS: u64 = 3;
        const MAX_BACKOFF_SECS: u64 = 8;
        const JITTER_MAX_SECS: u64 = 2;

        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_fetch_page(path, offset, extra) {
                Ok(batch) => return Ok(batch),
                Err(e) => {
                    eprintln!("⚠️ {path} offset {offset} attempt {attempt} failed: {e}");
                    last_err = Some(e);

                    // backoff
                    let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                    let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_SECS);
                    std::thread::sleep(Duration::from_secs(base + jitter));
                }
            }
        }

        Err(last_err.unwrap_or_else(|| BuildiumError::Network("retry loop failed".into())))
    }

    fn try_fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        offset: usize,
        extra: &[(&str, &str)],
    ) -> Result<Vec<T>, BuildiumError> {
        let url = format!("{}/{}", self.cfg.base_url.trim_end_matches('/'), path);

        let mut params = vec![
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), PAGE_LIMIT.to_string()),
        ];
        for (k, v) in extra {
            params.push((k.to_string(), v.to_string()));
        }

        let resp = self
            .client
            .get(&url)
            .header("x-buildium-client-id", &self.cfg.client_id)
            .header("x-buildium-client-secret", &self.cfg.client_secret)
            .query(&params)
            .send()
            .map_err(|e| BuildiumError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| BuildiumError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(BuildiumError::Api(format!("HTTP {status}: {text}")));
        }

        serde_json::from_str(&text).map_err(|e| BuildiumError::Deserialize(e.to_string()))
    }
}
