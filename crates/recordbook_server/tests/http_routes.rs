use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use recordbook_server::{app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn todo_item(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Description for Task 1",
        "due_date": "2024-07-24",
        "status": "pending",
        "priority": "medium",
        "creation_date": "2024-07-23"
    })
}

fn student(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "firstName": "Katherine",
        "middleName": "Coleman",
        "lastName": "Johnson",
        "dateOfBirth": "2002-08-26",
        "phoneNumber": "555-0142",
        "email": email,
        "module": "Orbital Mechanics",
        "enrollmentDate": "2022-09-01"
    })
}

fn vehicle_draft() -> Value {
    json!({
        "make": "Volkswagen",
        "model": "Golf",
        "year": 2017,
        "licence_plate": "VW17 GLF",
        "colour": "Grey",
        "mileage": 73000,
        "available": true,
        "quantity": 3
    })
}

#[tokio::test]
async fn todo_client_walkthrough() {
    let router = app(AppState::new());

    let (status, body) = call(&router, Method::POST, "/todolist/", Some(json!([todo_item("1", "Task 1")]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "1");

    let (status, body) = call(&router, Method::POST, "/todolist/", Some(json!([todo_item("1", "Task 1")]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ID_CONFLICT");
    assert!(body["detail"].as_str().unwrap().contains('1'));

    let (status, body) = call(&router, Method::GET, "/todolist/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = call(&router, Method::GET, "/todolist/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Task 1");

    let (status, body) = call(
        &router,
        Method::PUT,
        "/todolist/1",
        Some(todo_item("1", "Updated Task 1")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Updated Task 1");

    let (status, body) = call(&router, Method::DELETE, "/todolist/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Updated Task 1");

    let (status, body) = call(&router, Method::GET, "/todolist/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, body) = call(
        &router,
        Method::PUT,
        "/todolist/1",
        Some(todo_item("1", "Task 1 again")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "todo not found: 1");

    let (_, body) = call(&router, Method::GET, "/todolist/", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn student_batch_conflict_keeps_earlier_members() {
    let router = app(AppState::new());

    call(&router, Method::POST, "/students/", Some(json!([student("2", "two@example.com")]))).await;

    let (status, _) = call(
        &router,
        Method::POST,
        "/students/",
        Some(json!([student("1", "one@example.com"), student("2", "dup@example.com")])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(&router, Method::GET, "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "one@example.com");
}

#[tokio::test]
async fn student_with_bad_email_is_unprocessable() {
    let router = app(AppState::new());

    let (status, body) = call(&router, Method::POST, "/students/", Some(json!([student("1", "nope")]))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "VALIDATION_FAILED");

    let (_, body) = call(&router, Method::GET, "/students/", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn student_replace_keeps_path_key() {
    let router = app(AppState::new());
    call(&router, Method::POST, "/students/", Some(json!([student("1", "one@example.com")]))).await;

    let (status, body) = call(
        &router,
        Method::PUT,
        "/students/1",
        Some(student("other", "new@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "1");
    assert_eq!(body["email"], "new@example.com");

    let (status, _) = call(&router, Method::GET, "/students/other", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn vehicle_register_patch_delete() {
    let router = app(AppState::new());

    let (status, created) = call(&router, Method::POST, "/vehicles", Some(vehicle_draft())).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, patched) = call(
        &router,
        Method::PUT,
        &format!("/vehicles/{id}"),
        Some(json!({ "mileage": 75000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["mileage"], 75000);
    assert_eq!(patched["make"], "Volkswagen");
    assert_eq!(patched["quantity"], 3);

    let (status, removed) = call(&router, Method::DELETE, &format!("/vehicles/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["id"], id.as_str());

    let (status, _) = call(&router, Method::DELETE, &format!("/vehicles/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_vehicle_update_is_not_found() {
    let router = app(AppState::new());
    let (status, body) = call(
        &router,
        Method::PUT,
        "/vehicles/missing",
        Some(json!({ "colour": "Black" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "vehicle not found: missing");
}

#[tokio::test]
async fn health_reports_version() {
    let router = app(AppState::new());
    let (status, body) = call(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], recordbook_core::core_version());
}

async fn call_raw(router: &Router, uri: &str, body: &str) -> (StatusCode, String, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|value| value.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn malformed_bodies_use_json_error_envelope() {
    let router = app(AppState::new());

    let (status, content_type, body) = call_raw(&router, "/students/", r#"[{"id":"1"}]"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(content_type.starts_with("application/json"));
    assert_eq!(body["error"], "VALIDATION_FAILED");
    assert!(body["detail"].as_str().unwrap().contains("firstName"));

    let (status, content_type, body) = call_raw(&router, "/todolist/", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.starts_with("application/json"));
    assert!(body["detail"].is_string());

    let (_, body) = call(&router, Method::GET, "/students/", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn padded_student_email_is_unprocessable() {
    let router = app(AppState::new());

    let (status, body) = call(&router, Method::POST, "/students/", Some(json!([student("1", " a@b.co ")]))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn collections_answer_without_trailing_slash() {
    let router = app(AppState::new());

    let (status, _) = call(&router, Method::POST, "/todolist", Some(json!([todo_item("1", "Task 1")]))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&router, Method::GET, "/todolist", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "1");

    let (status, body) = call(&router, Method::GET, "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
