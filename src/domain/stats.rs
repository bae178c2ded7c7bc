// src/domain/stats.rs

use crate::domain::merge::Booth;

/// Portfolio-level summary shown in the map legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionStats {
    /// Percent of booths with at least one occupant, one decimal place.
    pub occupancy_pct: f64,
    /// Percent of occupant entries with balance <= 0, one decimal place.
    /// Counted per entry, not per booth: a booth with one current and one
    /// delinquent tenant contributes one unit to each side.
    pub rent_collection_pct: f64,
}

pub fn aggregate(booths: &[Booth]) -> CollectionStats {
    let total_booths = booths.len();
    let occupied = booths.iter().filter(|b| !b.occupants.is_empty()).count();
    let occupancy_pct = if total_booths > 0 {
        round1(occupied as f64 / total_booths as f64 * 100.0)
    } else {
        0.0
    };

    let occupant_count: usize = booths.iter().map(|b| b.occupants.len()).sum();
    let on_time = booths
        .iter()
        .flat_map(|b| &b.occupants)
        .filter(|o| o.balance <= 0.0)
        .count();
    let rent_collection_pct = if occupant_count > 0 {
        round1(on_time as f64 / occupant_count as f64 * 100.0)
    } else {
        0.0
    };

    CollectionStats {
        occupancy_pct,
        rent_collection_pct,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
