//! # Filter Module
//!
//! Validation and evaluation of client filter expressions over submission
//! questions. Clauses combine with AND; validation and matching both fail
//! closed.

pub mod clause;
pub mod engine;
pub mod errors;
pub mod validator;

pub use clause::{Comparator, FilterClause, FilterSet, FilterValue};
pub use engine::{apply, CompiledFilters, Predicate};
pub use errors::{FilterError, FilterResult};
pub use validator::{validate, validate_str, RawFilterParam};
