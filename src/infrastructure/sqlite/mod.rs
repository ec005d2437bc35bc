pub mod migrations;
pub mod reference_repo;
