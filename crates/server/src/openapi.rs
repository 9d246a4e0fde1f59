use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CreateContactQueryDoc {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
    /// `pending` (default), `under review` or `solved`
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateContactQueryDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactQueryDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

#[derive(ToSchema)]
pub struct ContactQueryPageDoc {
    pub contacts: Vec<ContactQueryDoc>,
    pub total: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contact_queries::list,
        crate::routes::contact_queries::create,
        crate::routes::contact_queries::get,
        crate::routes::contact_queries::update,
        crate::routes::contact_queries::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CreateContactQueryDoc,
            UpdateContactQueryDoc,
            ContactQueryDoc,
            ContactQueryPageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "query")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_contact_query_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/api/query"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/query/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
