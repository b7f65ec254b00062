use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Demo Ingest API",
        version = "0.1.0",
        description = "Synthetic event records written directly to PostgreSQL or through a NATS queue"
    ),
    servers(
        (url = "/api", description = "API base path")
    )
)]
struct BaseDoc;

/// Full API document: base info plus the demo domain paths.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_demo::handlers::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_contains_demo_paths() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Demo Ingest API");
        assert!(doc.paths.paths.contains_key("/demo"));
        assert!(doc.paths.paths.contains_key("/"));
    }
}
