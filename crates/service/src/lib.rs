//! Service layer providing the query operations behind the HTTP handlers.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Returns explicit error values instead of raising.

pub mod db;
pub mod errors;
pub mod pagination;
#[cfg(test)]
pub mod test_support;
