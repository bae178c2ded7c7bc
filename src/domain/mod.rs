pub mod classify;
pub mod index;
pub mod lease;
pub mod merge;
pub mod stats;
pub mod token;

pub use classify::{classify, BoothColor};
pub use index::{build_occupant_index, OccupantIndex};
pub use lease::{LeaseRecord, OccupantEntry};
pub use merge::{merge_layout, Booth, BoothLayout, MapLayout};
pub use stats::{aggregate, CollectionStats};
pub use token::{parse_token, Category, PrefixScheme};
