pub mod reference_repository;
