//! End-to-end tests for the people REST API over the in-memory store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{DateTime, TimeZone, Utc};
use mockable::{DefaultClock, MockClock};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use people_service::Trace;
use people_service::domain::ports::{PeopleCommand, PeopleQuery, PersonRepository};
use people_service::domain::{PeopleService, PersonDetails, PersonDraft, PersonId};
use people_service::inbound::http::ErrorResponse;
use people_service::inbound::http::people::people_scope;
use people_service::inbound::http::state::HttpState;
use people_service::outbound::memory::InMemoryPersonRepository;

#[fixture]
fn state() -> HttpState {
    let repository: Arc<dyn PersonRepository> = Arc::new(InMemoryPersonRepository::new());
    let service = Arc::new(PeopleService::new(repository, Arc::new(DefaultClock)));
    HttpState::new(service.clone(), service)
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .wrap(Trace)
                .service(people_scope()),
        )
        .await
    };
}

macro_rules! create {
    ($app:expr, $payload:expr) => {{
        let req = test::TestRequest::post()
            .uri("/people")
            .set_json($payload)
            .to_request();
        test::call_service(&$app, req).await.status()
    }};
}

#[rstest]
#[actix_web::test]
async fn full_lifecycle(state: HttpState) {
    let app = init_app!(state);

    let anna = json!({ "name": "Anna", "age": 30, "email": "a@b.com" });
    let bob = json!({ "name": "Bob", "age": 41, "email": "bob@example.org" });
    assert_eq!(create!(app, anna), StatusCode::OK);
    assert_eq!(create!(app, bob), StatusCode::OK);

    let list = test::TestRequest::get().uri("/people").to_request();
    let body: Value = test::call_and_read_body_json(&app, list).await;
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Anna", "age": 30, "email": "a@b.com" },
            { "id": 2, "name": "Bob", "age": 41, "email": "bob@example.org" }
        ])
    );

    let delete = test::TestRequest::post()
        .uri("/people/delete/1")
        .to_request();
    assert_eq!(test::call_service(&app, delete).await.status(), StatusCode::OK);

    let get = test::TestRequest::get().uri("/people/1").to_request();
    let res = test::call_service(&app, get).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = test::read_body_json(res).await;
    assert_eq!(error.message, "Person with this wasn't found!");

    let get = test::TestRequest::get().uri("/people/2").to_request();
    let body: Value = test::call_and_read_body_json(&app, get).await;
    assert_eq!(body["name"], "Bob");
}

#[rstest]
#[actix_web::test]
async fn create_with_existing_id_overwrites(state: HttpState) {
    let app = init_app!(state);

    create!(app, json!({ "name": "Anna", "age": 30, "email": "a@b.com" }));
    let status = create!(
        app,
        json!({ "id": 1, "name": "Anna Maria", "age": 31, "email": "anna@b.com" })
    );
    assert_eq!(status, StatusCode::OK);

    let list = test::TestRequest::get().uri("/people").to_request();
    let body: Value = test::call_and_read_body_json(&app, list).await;
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "Anna Maria", "age": 31, "email": "anna@b.com" }])
    );
}

#[rstest]
#[actix_web::test]
async fn rejected_create_leaves_store_untouched(state: HttpState) {
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/people")
        .set_json(json!({ "name": "", "age": -5, "email": "bad" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = test::read_body_json(res).await;
    assert_eq!(
        error.message,
        "name - Name should not be empty;age - Age should be greater than 0;email - Email should be valid;"
    );

    let list = test::TestRequest::get().uri("/people").to_request();
    let body: Value = test::call_and_read_body_json(&app, list).await;
    assert_eq!(body, json!([]));
}

fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[tokio::test]
async fn service_stamps_audit_fields_from_clock() {
    let mut clock = MockClock::new();
    clock.expect_utc().returning(fixed_instant);
    let repository: Arc<dyn PersonRepository> = Arc::new(InMemoryPersonRepository::new());
    let service = PeopleService::new(repository, Arc::new(clock));

    let saved = service
        .save(PersonDraft::new(PersonDetails {
            name: "Anna".to_owned(),
            age: 30,
            email: "a@b.com".to_owned(),
        }))
        .await
        .expect("save succeeds");

    let stored = service.find_one(saved.id).await.expect("person stored");
    assert_eq!(stored.audit.created_who, "ADMIN");
    assert_eq!(stored.audit.created_at, fixed_instant());
    assert!(stored.audit.updated_at >= stored.audit.created_at);
}

#[tokio::test]
async fn update_targets_the_given_id() {
    let repository: Arc<dyn PersonRepository> = Arc::new(InMemoryPersonRepository::new());
    let service = PeopleService::new(repository, Arc::new(DefaultClock));
    let details = |name: &str| PersonDetails {
        name: name.to_owned(),
        age: 30,
        email: "a@b.com".to_owned(),
    };

    let first = service
        .save(PersonDraft::new(details("Anna")))
        .await
        .expect("save succeeds");
    let updated = service
        .update(first.id, PersonDraft::new(details("Annika")))
        .await
        .expect("update succeeds");

    assert_eq!(updated.id, first.id);
    let all = service.find_all().await.expect("list succeeds");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].details.name, "Annika");
    assert!(service.find_one(PersonId::new(99)).await.is_err());
}
