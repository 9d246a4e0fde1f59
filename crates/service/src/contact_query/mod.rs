//! Contact queries: submitted contact-form messages and their review status.
//!
//! `service::ContactQueryService` owns every decision (validation, filtering,
//! paging, lifecycle policy); repositories only persist.

pub mod domain;
pub mod filter;
pub mod repository;
pub mod service;

pub use domain::{ContactPolicy, ContactQueryPage, CreateContactQuery, ListParams, UpdateContactQuery};
pub use filter::ContactQueryFilter;
pub use repository::{ContactQueryRepository, SeaOrmContactQueryRepository};
pub use service::{ContactQueryService, DynContactQueryService};
