pub mod error;
pub mod format;
pub mod input;
pub mod normalize;
pub mod parser;
pub mod persist;
pub mod splice;
pub mod store;
pub mod syntax;

pub use error::StoreError;
pub use lexique_types::{Example, Record};
pub use normalize::{headword_key, normalize};
pub use store::{AddOutcome, DuplicateAction, EntryStore};
