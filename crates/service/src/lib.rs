//! Service layer providing the contact-query operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod contact_query;
#[cfg(test)]
pub mod test_support;
