//! Data-access layer: entity records and the campaign data collaborator.

pub mod api;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

pub use api::{CampaignApi, FetchError, MockDataSource};
