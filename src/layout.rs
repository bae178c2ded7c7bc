// src/layout.rs

use crate::domain::MapLayout;
use std::fs;
use std::path::Path;

/// Reads the floor-plan layout file.
///
/// A missing or unparsable file is treated as an empty plane with zero
/// booths, never a fatal error; the map page shows its own empty-state
/// message in that case.
pub fn load_map_layout(path: &Path) -> MapLayout {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("⚠️ Map layout {} unreadable ({e}), using empty plane", path.display());
            return MapLayout::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("⚠️ Map layout {} invalid ({e}), using empty plane", path.display());
            MapLayout::default()
        }
    }
}
