pub mod build;
pub mod query;
pub mod stats;
pub mod storage;
