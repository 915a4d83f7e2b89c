//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the people and health endpoints together with the
//! [`PersonDto`] and [`ErrorResponse`] schemas. The generated document is
//! served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::ErrorResponse;
use crate::inbound::http::people_dto::PersonDto;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "People service API",
        description = "CRUD access to stored people and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::people::list_people,
        crate::inbound::http::people::create_person,
        crate::inbound::http::people::get_person,
        crate::inbound::http::people::delete_person,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(PersonDto, ErrorResponse)),
    tags(
        (name = "people", description = "Create, read and delete people"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
