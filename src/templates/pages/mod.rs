pub mod leases;
pub mod map;

pub use leases::leases_page;
pub use map::{map_page, MapVm};
