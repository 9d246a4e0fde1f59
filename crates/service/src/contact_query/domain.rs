use serde::{Deserialize, Serialize};

use configs::ContactsConfig;
use models::contact_query::{self, ContactStatus, NewContactQuery};

use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Body accepted on create. Keys outside this list are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContactQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateContactQuery {
    pub fn into_new(self) -> Result<NewContactQuery, ServiceError> {
        let status = self.status.as_deref().map(ContactStatus::parse).transpose()?;
        let input = NewContactQuery {
            name: required("name", self.name)?,
            email: required("email", self.email)?,
            mobile: required("mobile", self.mobile)?,
            message: required("message", self.message)?,
            status,
        };
        input.validate()?;
        Ok(input)
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ServiceError> {
    value.ok_or_else(|| ServiceError::Validation(format!("{} required", field)))
}

/// Body accepted on update; absent keys leave the stored value untouched.
/// `id` and `createdAt` are not part of it and can never be written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContactQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateContactQuery {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.mobile.is_none() && self.message.is_none() && self.status.is_none()
    }

    /// Apply onto the stored record and re-validate the result.
    pub fn apply(self, mut current: contact_query::Model) -> Result<contact_query::Model, ServiceError> {
        if let Some(s) = self.status.as_deref() { current.status = ContactStatus::parse(s)?; }
        if let Some(v) = self.name { current.name = v; }
        if let Some(v) = self.email { current.email = v; }
        if let Some(v) = self.mobile { current.mobile = v; }
        if let Some(v) = self.message { current.message = v; }
        current.validate()?;
        Ok(current)
    }
}

/// Raw list parameters as they arrive in the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactQueryPage {
    pub contacts: Vec<contact_query::Model>,
    pub total: u64,
}

/// Listing bounds and lifecycle rules applied by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPolicy {
    pub default_limit: u64,
    pub max_limit: u64,
    /// Reject any update once a record is `solved`.
    pub lock_solved: bool,
}

impl ContactPolicy {
    pub fn pagination(&self, params: &ListParams) -> Pagination {
        Pagination::from_params(params.page.as_deref(), params.limit.as_deref(), self.default_limit, self.max_limit)
    }
}

impl Default for ContactPolicy {
    fn default() -> Self {
        Self { default_limit: Pagination::DEFAULT_LIMIT, max_limit: Pagination::MAX_LIMIT, lock_solved: false }
    }
}

impl From<&ContactsConfig> for ContactPolicy {
    fn from(cfg: &ContactsConfig) -> Self {
        Self { default_limit: cfg.default_limit, max_limit: cfg.max_limit, lock_solved: cfg.lock_solved }
    }
}
