pub mod entities;
pub mod error;
pub mod ports;
pub mod seed;
pub mod services;
pub mod values;
