use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Buildium /v1 payloads, trimmed to the fields this app reads.
// Every upstream field is optional; the assembly step supplies defaults.

#[derive(Debug, Deserialize)]
pub struct Lease {
    #[serde(rename = "Id")]
    pub id: Option<i64>,
    #[serde(rename = "UnitNumber")]
    pub unit_number: Option<String>,
    #[serde(rename = "LeaseToDate")]
    pub lease_to_date: Option<String>,
    #[serde(rename = "PropertyId")]
    pub property_id: Option<i64>,
    #[serde(rename = "RentalUnitId")]
    pub rental_unit_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct OutstandingBalance {
    #[serde(rename = "LeaseId")]
    pub lease_id: Option<i64>,
    #[serde(rename = "TotalBalance", default, deserialize_with = "lenient_f64")]
    pub total_balance: f64,
}

#[derive(Debug, Deserialize)]
pub struct RentalUnit {
    #[serde(rename = "Id")]
    pub id: Option<i64>,
    #[serde(rename = "UnitNumber")]
    pub unit_number: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<UnitAddress>,
}

#[derive(Debug, Deserialize)]
pub struct UnitAddress {
    #[serde(rename = "AddressLine1")]
    pub address_line1: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RentalProperty {
    #[serde(rename = "Id")]
    pub id: Option<i64>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

/// Balances arrive as numbers, occasionally as numeric strings, and
/// sometimes not at all. Anything unusable becomes 0 so one bad row cannot
/// sink a whole page of results.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .unwrap_or(0.0))
}
