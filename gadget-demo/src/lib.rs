pub mod app_config;
pub mod fixtures;
pub mod report;

pub use fixtures::PurchaseFixture;
pub use report::PurchaseReport;
