pub mod encoder;
pub mod similarity;
