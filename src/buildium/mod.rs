pub mod api_error;
pub mod client;
pub mod leases;
pub mod models;

pub use api_error::BuildiumError;
pub use client::BuildiumClient;
pub use leases::LeaseSource;
