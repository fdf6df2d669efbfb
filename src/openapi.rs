//! OpenAPI document served at `/openapi.json` for the API reference page.

use crate::error::{ErrorBody, ErrorDetail};
use crate::routes::common::{HealthBody, ReadyBody, VersionBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "prezel starter", description = "Clap counter starter app"),
    paths(
        crate::handlers::page::home,
        crate::handlers::page::clap,
        crate::routes::common::health,
        crate::routes::common::ready,
        crate::routes::common::version,
    ),
    components(schemas(ErrorBody, ErrorDetail, HealthBody, ReadyBody, VersionBody)),
    tags(
        (name = "starter", description = "Counter page"),
        (name = "ops", description = "Health and version")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_page_and_ops_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/"));
        assert!(paths.contains(&"/health"));
        assert!(paths.contains(&"/ready"));
        let root = &doc.paths.paths["/"];
        assert!(root.get.is_some());
        assert!(root.post.is_some());
    }
}
