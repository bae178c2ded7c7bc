// src/domain/token.rs

/// Booth use-type inferred from a location token's prefix.
///
/// Declaration order is the coloring priority: when a booth is touched by
/// tokens of several categories, the smallest variant wins. Extended
/// sub-categories outrank their base category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    StorageExt,
    PantryExt,
    KitchenExt,
    OfficeExt,
    Storage,
    Pantry,
    Kitchen,
    Office,
    None,
}

/// Which prefix table the parser recognizes.
///
/// `Extended` adds the `SX`/`PX`/`KX`/`OFX` sub-categories. The two schemes
/// are mutually exclusive: under `Simple`, a token like `SX12` reads as
/// Storage booth `X12`, so a site using extended labels must opt in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixScheme {
    #[default]
    Simple,
    Extended,
}

impl PrefixScheme {
    /// Accepts the config spelling ("extended" turns the extra prefixes on,
    /// anything else stays simple).
    pub fn from_config(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("extended") {
            PrefixScheme::Extended
        } else {
            PrefixScheme::Simple
        }
    }
}

/// Splits a raw location token into its category and canonical booth key.
///
/// `S`/`P` tokens strip the prefix (those booths have numeric labels),
/// `K`/`OF` tokens keep the whole token (lettered labels). Anything else is
/// an unprefixed label used as-is. Keys are trimmed and uppercased so that
/// lookups are case-insensitive.
pub fn parse_token(token: &str, scheme: PrefixScheme) -> (Category, String) {
    let up = token.trim().to_uppercase();

    if scheme == PrefixScheme::Extended {
        if let Some(rest) = up.strip_prefix("SX") {
            return (Category::StorageExt, rest.to_string());
        }
        if let Some(rest) = up.strip_prefix("PX") {
            return (Category::PantryExt, rest.to_string());
        }
        if up.starts_with("KX") {
            return (Category::KitchenExt, up);
        }
        if up.starts_with("OFX") {
            return (Category::OfficeExt, up);
        }
    }

    // "OF" is a two-character prefix; it must never be reduced to "O".
    if up.starts_with("OF") {
        return (Category::Office, up);
    }
    if up.starts_with('K') {
        return (Category::Kitchen, up);
    }
    if let Some(rest) = up.strip_prefix('S') {
        return (Category::Storage, rest.to_string());
    }
    if let Some(rest) = up.strip_prefix('P') {
        return (Category::Pantry, rest.to_string());
    }

    (Category::None, up)
}
