pub mod generator;
pub mod prompt;
pub mod response;

pub use generator::FrenchGenerator;
pub use prompt::entry_prompt;
pub use response::{Draft, parse_response};
