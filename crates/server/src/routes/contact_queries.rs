use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use common::types::Message;
use models::contact_query;
use service::contact_query::{ContactQueryPage, CreateContactQuery, ListParams, UpdateContactQuery};

use crate::{errors::JsonApiError, routes::ServerState};

/// Raw list parameters; parsing and defaults are applied by the service.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page, default 1
    pub page: Option<String>,
    /// Page size, default 10, max 100
    pub limit: Option<String>,
    /// Case-insensitive substring over name, email, mobile and message
    pub search: Option<String>,
    /// `pending`, `under review` or `solved`
    pub status: Option<String>,
}

impl From<ListQuery> for ListParams {
    fn from(q: ListQuery) -> Self {
        ListParams { page: q.page, limit: q.limit, search: q.search, status: q.status }
    }
}

#[utoipa::path(
    post, path = "/api/query", tag = "query",
    request_body = crate::openapi::CreateContactQueryDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ContactQueryDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CreateContactQuery>, JsonRejection>,
) -> Result<(StatusCode, Json<contact_query::Model>), JsonApiError> {
    let Json(input) = body?;
    Ok((StatusCode::CREATED, Json(state.contacts.create(input).await?)))
}

#[utoipa::path(
    get, path = "/api/query", tag = "query",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::ContactQueryPageDoc),
        (status = 400, description = "Invalid status filter or malformed query string"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ContactQueryPage>, JsonApiError> {
    let Query(q) = query?;
    Ok(Json(state.contacts.list(&q.into()).await?))
}

#[utoipa::path(
    get, path = "/api/query/{id}", tag = "query",
    params(("id" = String, Path, description = "Contact query ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContactQueryDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<contact_query::Model>, JsonApiError> {
    Ok(Json(state.contacts.get(&id).await?))
}

#[utoipa::path(
    put, path = "/api/query/{id}", tag = "query",
    params(("id" = String, Path, description = "Contact query ID")),
    request_body = crate::openapi::UpdateContactQueryDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContactQueryDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Record is solved and locked"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateContactQuery>, JsonRejection>,
) -> Result<Json<contact_query::Model>, JsonApiError> {
    let Json(input) = body?;
    Ok(Json(state.contacts.update(&id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/query/{id}", tag = "query",
    params(("id" = String, Path, description = "Contact query ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    state.contacts.delete(&id).await?;
    Ok(Json(Message::new("Contact deleted successfully")))
}
