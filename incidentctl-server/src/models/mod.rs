//! Domain models and request parameter validation
//!
//! Invalid input returns ValidationError, not panic.

pub mod incident;
pub mod pagination;
pub mod search;
pub mod validation;

pub use incident::Incident;
pub use pagination::{Page, DEFAULT_LIMIT};
pub use search::{contains_pattern, SearchTerm, MIN_SEARCH_LEN};
pub use validation::{Validate, ValidationError};
