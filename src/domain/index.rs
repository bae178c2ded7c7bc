// src/domain/index.rs

use crate::domain::lease::{LeaseRecord, OccupantEntry};
use crate::domain::token::{parse_token, PrefixScheme};
use std::collections::HashMap;

/// Occupants grouped by canonical booth key.
pub type OccupantIndex = HashMap<String, Vec<OccupantEntry>>;

/// Groups lease records by the booths their location tokens resolve to.
///
/// A lease with location "S24 P10" lands under both "24" and "10", and each
/// entry carries the whole original location string so the classifier can
/// see every category the occupant touches. Leases whose location is empty
/// or "N/A" contribute nothing. Entries within a booth keep lease iteration
/// order so popups render deterministically.
pub fn build_occupant_index(leases: &[LeaseRecord], scheme: PrefixScheme) -> OccupantIndex {
    let mut index: OccupantIndex = HashMap::new();

    for lease in leases {
        let loc = lease.location.trim();
        if loc.is_empty() || loc.eq_ignore_ascii_case("N/A") {
            continue;
        }

        for token in loc.split_whitespace() {
            let (_, booth_key) = parse_token(token, scheme);
            index
                .entry(booth_key)
                .or_default()
                .push(OccupantEntry::from_lease(lease));
        }
    }

    index
}
