pub mod catalog;
pub mod contracts;

pub use catalog::RegionCatalog;
pub use contracts::{RegionError, RegionQueryService, RegionSummary};
