pub mod types;

pub use types::{Example, Record};
