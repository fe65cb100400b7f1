pub mod activity_catalog;
pub mod seed_data;

pub use activity_catalog::ActivityCatalog;
