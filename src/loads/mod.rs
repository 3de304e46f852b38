//! Load cases for stress-life analysis

mod load_case;

pub use load_case::{LoadCase, LoadValue};
