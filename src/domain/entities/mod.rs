pub mod match_result;
pub mod reference_entry;
pub mod reference_store;
pub mod sequence_record;
