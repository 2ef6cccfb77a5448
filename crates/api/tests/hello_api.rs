//! HTTP-level integration tests for the hello-world person app.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_greets_world_without_persons(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/hello").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Hello world");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_greets_first_person(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/hello/persons", json!({ "name": "Amy" })).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/hello/persons", json!({ "name": "Bob" })).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/hello").await;
    assert_eq!(body_text(response).await, "Hello Amy");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_persons(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/hello/persons", json!({ "name": "Amy" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["person"]["name"], "Amy");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/hello/persons").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["persons"].as_array().unwrap().len(), 1);
    assert_eq!(json["persons"][0]["name"], "Amy");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_persons_respects_limit(pool: PgPool) {
    for name in ["a", "b", "c"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/hello/persons", json!({ "name": name })).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/hello/persons?limit=2&offset=1").await).await;
    let persons = json["persons"].as_array().unwrap();
    assert_eq!(persons.len(), 2);
    assert_eq!(persons[0]["name"], "b");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_name_is_unprocessable(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/hello/persons", json!({ "name": "  " })).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
}
