// src/domain/lease.rs

use chrono::NaiveDate;
use serde::Serialize;

/// A lease as assembled from the property-management API, read-only for the
/// rest of the pipeline. One record per lease; a record can reference
/// several booths through its location string.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaseRecord {
    pub lease_id: i64,
    pub occupant_name: String,
    /// Whitespace-separated booth tokens, or "N/A" when the unit has no
    /// usable address line.
    pub location: String,
    /// Outstanding balance; positive means the occupant owes money.
    pub balance: f64,
    pub lease_end: Option<NaiveDate>,
    pub property_name: String,
}

/// Denormalized projection of a lease attached to a single booth, shaped for
/// the popup display. Serialized into the page's booth payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupantEntry {
    pub occupant_name: String,
    pub lease_id: i64,
    pub lease_end: String,
    pub balance: f64,
    /// The lease's entire location string, not just the token that matched
    /// this booth. Classification re-reads every token from it.
    pub location: String,
}

impl OccupantEntry {
    pub fn from_lease(lease: &LeaseRecord) -> Self {
        OccupantEntry {
            occupant_name: lease.occupant_name.clone(),
            lease_id: lease.lease_id,
            lease_end: lease
                .lease_end
                .map(|d| d.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            balance: lease.balance,
            location: lease.location.trim().to_string(),
        }
    }
}
