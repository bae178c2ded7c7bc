// src/buildium/leases.rs

use crate::buildium::api_error::BuildiumError;
use crate::buildium::client::BuildiumClient;
use crate::buildium::models::{Lease, OutstandingBalance, RentalProperty, RentalUnit};
use crate::domain::LeaseRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Source of assembled lease records.
///
/// The router depends on this seam rather than on the client directly, so
/// tests can substitute canned records for the live API.
pub trait LeaseSource: Send + Sync {
    fn lease_records(&self) -> Result<Vec<LeaseRecord>, BuildiumError>;
}

impl LeaseSource for BuildiumClient {
    fn lease_records(&self) -> Result<Vec<LeaseRecord>, BuildiumError> {
        let leases = self.fetch_all_leases()?;
        if leases.is_empty() {
            return Ok(Vec::new());
        }

        let balances = self.fetch_outstanding_balances()?;
        let units = self.fetch_all_units()?;
        let properties = self.fetch_all_properties()?;

        Ok(assemble_lease_records(leases, balances, units, properties))
    }
}

/// Flattens the four Buildium result sets into clean lease records.
///
/// Acts as an anti-corruption layer between the raw API models and the
/// classification core: balances join by lease id (missing => 0), units by
/// `RentalUnitId` with a fallback match on the unit number, properties by
/// `PropertyId` (missing => "Unknown Property"). The location is the unit's
/// first address line; units without one read as "N/A" and later contribute
/// no booth tokens.
pub fn assemble_lease_records(
    leases: Vec<Lease>,
    balances: Vec<OutstandingBalance>,
    units: Vec<RentalUnit>,
    properties: Vec<RentalProperty>,
) -> Vec<LeaseRecord> {
    let bal_map: HashMap<i64, f64> = balances
        .into_iter()
        .filter_map(|b| b.lease_id.map(|id| (id, b.total_balance)))
        .collect();

    let prop_map: HashMap<i64, String> = properties
        .into_iter()
        .filter_map(|p| {
            p.id.map(|id| {
                (
                    id,
                    p.name.unwrap_or_else(|| "Unknown Property".to_string()),
                )
            })
        })
        .collect();

    let unit_by_id: HashMap<i64, &RentalUnit> =
        units.iter().filter_map(|u| u.id.map(|id| (id, u))).collect();

    let mut records = Vec::with_capacity(leases.len());

    for lease in &leases {
        // A lease without an id cannot be joined to anything.
        let Some(lease_id) = lease.id else { continue };

        let occupant_name = lease
            .unit_number
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());

        let unit = lease
            .rental_unit_id
            .and_then(|id| unit_by_id.get(&id).copied())
            .or_else(|| {
                units
                    .iter()
                    .find(|u| u.unit_number.as_deref() == Some(occupant_name.as_str()))
            });

        let location = unit
            .and_then(|u| u.address.as_ref())
            .and_then(|a| a.address_line1.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("N/A")
            .to_string();

        let property_name = lease
            .property_id
            .and_then(|id| prop_map.get(&id).cloned())
            .unwrap_or_else(|| "Unknown Property".to_string());

        records.push(LeaseRecord {
            lease_id,
            occupant_name,
            location,
            balance: bal_map.get(&lease_id).copied().unwrap_or(0.0),
            lease_end: parse_lease_end(lease.lease_to_date.as_deref()),
            property_name,
        });
    }

    records
}

fn parse_lease_end(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}
