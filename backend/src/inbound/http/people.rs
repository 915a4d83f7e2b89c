//! People API handlers.
//!
//! ```text
//! GET  /people
//! GET  /people/{id}
//! POST /people {"name":"Anna","age":30,"email":"a@b.com"}
//! POST /people/delete/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{PersonDraft, PersonId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ErrorResponse, json_payload_error};
use crate::inbound::http::people_dto::PersonDto;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::ensure_valid_person;

/// Build the `/people` scope with every people route and JSON body handling.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use people_service::inbound::http::people::people_scope;
///
/// let app = App::new().service(people_scope());
/// ```
pub fn people_scope() -> actix_web::Scope {
    web::scope("/people")
        .app_data(web::JsonConfig::default().error_handler(json_payload_error))
        .service(list_people)
        .service(create_person)
        .service(get_person)
        .service(delete_person)
}

/// List every stored person in ascending id order.
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All people", body = [PersonDto]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    ),
    tags = ["people"],
    operation_id = "listPeople"
)]
#[get("")]
pub async fn list_people(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PersonDto>>> {
    let people = state.people_query.find_all().await?;
    Ok(web::Json(people.into_iter().map(PersonDto::from).collect()))
}

/// Validate and store a person.
///
/// Responds `200` with an empty body; the assigned id is not returned.
#[utoipa::path(
    post,
    path = "/people",
    request_body = PersonDto,
    responses(
        (status = 200, description = "Person saved"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    ),
    tags = ["people"],
    operation_id = "createPerson"
)]
#[post("")]
pub async fn create_person(
    state: web::Data<HttpState>,
    payload: web::Json<PersonDto>,
) -> ApiResult<HttpResponse> {
    let dto = payload.into_inner();
    ensure_valid_person(&dto)?;
    state.people.save(PersonDraft::from(dto)).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Fetch a single person by id.
#[utoipa::path(
    get,
    path = "/people/{id}",
    params(("id" = i32, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person found", body = PersonDto),
        (status = 404, description = "No person with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    ),
    tags = ["people"],
    operation_id = "getPerson"
)]
#[get("/{id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<PersonDto>> {
    let id = PersonId::new(path.into_inner());
    let person = state.people_query.find_one(id).await?;
    Ok(web::Json(PersonDto::from(person)))
}

/// Delete a person by id. Unknown ids are a no-op.
#[utoipa::path(
    post,
    path = "/people/delete/{id}",
    params(("id" = i32, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person deleted or already absent"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    ),
    tags = ["people"],
    operation_id = "deletePerson"
)]
#[post("/delete/{id}")]
pub async fn delete_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.people.delete(PersonId::new(path.into_inner())).await?;
    Ok(HttpResponse::Ok().finish())
}
