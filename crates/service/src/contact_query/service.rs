use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use models::contact_query;

use crate::contact_query::domain::{ContactPolicy, ContactQueryPage, CreateContactQuery, ListParams, UpdateContactQuery};
use crate::contact_query::filter::ContactQueryFilter;
use crate::contact_query::repository::ContactQueryRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "contact query";

/// Application service encapsulating contact-query business rules.
/// Validation, filtering, paging and the lifecycle policy live here;
/// the repository only stores rows.
pub struct ContactQueryService<R: ?Sized> {
    repo: Arc<R>,
    policy: ContactPolicy,
}

/// Service over a type-erased repository, as held by the HTTP layer.
pub type DynContactQueryService = ContactQueryService<dyn ContactQueryRepository>;

impl<R: ContactQueryRepository + ?Sized> ContactQueryService<R> {
    pub fn new(repo: Arc<R>, policy: ContactPolicy) -> Self { Self { repo, policy } }

    #[instrument(skip_all)]
    pub async fn create(&self, input: CreateContactQuery) -> Result<contact_query::Model, ServiceError> {
        let record = input.into_new()?.into_model()?;
        let created = self.repo.insert(record).await?;
        info!(id = %created.id, status = %created.status, "contact_query_created");
        Ok(created)
    }

    #[instrument(skip(self), fields(page = tracing::field::Empty, limit = tracing::field::Empty))]
    pub async fn list(&self, params: &ListParams) -> Result<ContactQueryPage, ServiceError> {
        let filter = ContactQueryFilter::new(params.search.as_deref(), params.status.as_deref())?;
        let paging = self.policy.pagination(params);
        tracing::Span::current().record("page", paging.page).record("limit", paging.limit);
        let (contacts, total) = self.repo.find_page(&filter, paging.offset(), paging.limit).await?;
        info!(count = contacts.len(), total, "contact_query_listed");
        Ok(ContactQueryPage { contacts, total })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<contact_query::Model, ServiceError> {
        let id = parse_id(id)?;
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateContactQuery) -> Result<contact_query::Model, ServiceError> {
        let id = parse_id(id)?;
        let current = self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY))?;
        if self.policy.lock_solved && current.status.is_terminal() && !input.is_empty() {
            warn!(%id, "update_rejected_on_solved_contact_query");
            return Err(ServiceError::Conflict("contact query is solved and can no longer be edited".into()));
        }
        let from = current.status;
        let next = input.apply(current)?;
        let updated = self.repo.update(next).await?.ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(id = %updated.id, from = %from, to = %updated.status, "contact_query_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!(%id, "contact_query_deleted");
        Ok(())
    }
}

/// A malformed id can never name a stored record.
fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::not_found(ENTITY))
}
