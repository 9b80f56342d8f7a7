pub mod error;
pub use error::RangeIndexError;
