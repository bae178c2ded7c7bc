// src/domain/merge.rs

use crate::domain::classify::{classify, BoothColor};
use crate::domain::index::OccupantIndex;
use crate::domain::lease::OccupantEntry;
use crate::domain::token::PrefixScheme;
use serde::{Deserialize, Serialize};

fn default_plane_width() -> u32 {
    600
}

fn default_plane_height() -> u32 {
    1000
}

/// The static floor plan as stored in the layout file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayout {
    #[serde(default = "default_plane_width")]
    pub plane_width: u32,
    #[serde(default = "default_plane_height")]
    pub plane_height: u32,
    #[serde(default)]
    pub booths: Vec<BoothLayout>,
}

impl Default for MapLayout {
    fn default() -> Self {
        MapLayout {
            plane_width: default_plane_width(),
            plane_height: default_plane_height(),
            booths: Vec::new(),
        }
    }
}

/// One booth's geometry within the plane.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoothLayout {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// A layout booth enriched with occupancy and color, ready to serialize
/// into the page payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booth {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub occupants: Vec<OccupantEntry>,
    pub color: BoothColor,
    pub past_due: bool,
}

/// Joins classifier output onto the static layout.
///
/// Labels match occupant-index keys case-insensitively and trimmed. A booth
/// whose label appears in no index entry stays vacant; occupant groups whose
/// key matches no layout label are dropped (the lease table still shows
/// them). Layout records are never mutated — each request builds fresh
/// booths, so concurrent renders cannot interfere.
pub fn merge_layout(
    layout: &MapLayout,
    index: &OccupantIndex,
    scheme: PrefixScheme,
) -> Vec<Booth> {
    layout
        .booths
        .iter()
        .map(|b| {
            let label = b.label.trim().to_string();
            let occupants = index
                .get(&label.to_uppercase())
                .cloned()
                .unwrap_or_default();

            let (color, past_due) = if occupants.is_empty() {
                (BoothColor::Vacant, false)
            } else {
                classify(&occupants, scheme)
            };

            Booth {
                label,
                x: b.x,
                y: b.y,
                width: b.width,
                height: b.height,
                occupants,
                color,
                past_due,
            }
        })
        .collect()
}
