// src/domain/classify.rs

use crate::domain::lease::OccupantEntry;
use crate::domain::token::{parse_token, Category, PrefixScheme};
use serde::{Serialize, Serializer};

/// Symbolic display color for a booth. Resolved to a hex value only at the
/// serialization boundary, so the classification policy stays independent
/// of presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoothColor {
    Vacant,
    PastDue,
    CompanyStorage,
    StorageExt,
    PantryExt,
    KitchenExt,
    OfficeExt,
    Storage,
    Pantry,
    Kitchen,
    Office,
    OnTime,
}

impl BoothColor {
    /// The production pastel palette. Extended categories use darker
    /// companions of their base hue.
    pub fn hex(self) -> &'static str {
        match self {
            BoothColor::Vacant => "#bdbdbd",
            BoothColor::PastDue => "#ff8a8a",
            BoothColor::CompanyStorage => "#bca4ff",
            BoothColor::StorageExt => "#7d81d4",
            BoothColor::PantryExt => "#51aef7",
            BoothColor::KitchenExt => "#3fdcb9",
            BoothColor::OfficeExt => "#f7b04e",
            BoothColor::Storage => "#a7aae6",
            BoothColor::Pantry => "#84c7ff",
            BoothColor::Kitchen => "#72f0d5",
            BoothColor::Office => "#ffca7a",
            BoothColor::OnTime => "#8ae89f",
        }
    }

    fn for_category(category: Category) -> Option<Self> {
        match category {
            Category::StorageExt => Some(BoothColor::StorageExt),
            Category::PantryExt => Some(BoothColor::PantryExt),
            Category::KitchenExt => Some(BoothColor::KitchenExt),
            Category::OfficeExt => Some(BoothColor::OfficeExt),
            Category::Storage => Some(BoothColor::Storage),
            Category::Pantry => Some(BoothColor::Pantry),
            Category::Kitchen => Some(BoothColor::Kitchen),
            Category::Office => Some(BoothColor::Office),
            Category::None => None,
        }
    }
}

impl Serialize for BoothColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.hex())
    }
}

/// Derives a booth's display color and past-due flag from its occupants.
///
/// The cascade runs top to bottom, first match wins:
/// 1. summed balance > 0 => past due (dedicated color, cascade stops);
/// 2. any occupant named "company storage" => company-storage color;
/// 3. highest-priority category among every token of every occupant's
///    location string;
/// 4. otherwise the on-time color.
///
/// Pure over its input. The caller handles the empty list as vacant before
/// getting here, but an empty list still yields a defined result.
pub fn classify(occupants: &[OccupantEntry], scheme: PrefixScheme) -> (BoothColor, bool) {
    let total: f64 = occupants.iter().map(|o| o.balance).sum();
    if total > 0.0 {
        return (BoothColor::PastDue, true);
    }

    let company_storage = occupants
        .iter()
        .any(|o| o.occupant_name.to_lowercase().contains("company storage"));
    if company_storage {
        return (BoothColor::CompanyStorage, false);
    }

    let top_category = occupants
        .iter()
        .flat_map(|o| o.location.split_whitespace())
        .map(|t| parse_token(t, scheme).0)
        .filter(|c| *c != Category::None)
        .min();

    match top_category.and_then(BoothColor::for_category) {
        Some(color) => (color, false),
        None => (BoothColor::OnTime, false),
    }
}
