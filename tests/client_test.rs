use std::sync::Arc;

use mockito::{Matcher, Server};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::json;
use taskdock::client::*;
use taskdock::errors::{ApiError, GENERIC_ERROR_CODE};
use taskdock::types::{
    CreateTaskRequest, ListTasksQuery, Priority, TaskStatusFilter, UpdateTaskRequest,
};

fn wire_task(id: i64, completed: bool) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": "user-1",
        "title": format!("Task {}", id),
        "description": null,
        "is_completed": completed,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z",
        "due_date": null,
        "priority": "medium"
    })
}

fn envelope(data: serde_json::Value) -> String {
    json!({ "success": true, "data": data }).to_string()
}

fn client_for(server: &Server, token: Option<&str>) -> ApiClient {
    let tokens: Arc<dyn TokenProvider> = match token {
        Some(t) => Arc::new(StaticToken(t.to_string())),
        None => Arc::new(NoToken),
    };
    ApiClient::new(format!("{}/api", server.url()), tokens)
}

#[test]
fn test_tasks_path_with_all_params() {
    let query = ListTasksQuery {
        status: Some(TaskStatusFilter::Completed),
        limit: Some(10),
        offset: Some(20),
    };
    assert_eq!(tasks_path(&query), "/tasks?status=completed&limit=10&offset=20");
}

#[test]
fn test_tasks_path_without_params() {
    assert_eq!(tasks_path(&ListTasksQuery::default()), "/tasks");

    // zero limit/offset are dropped like unset ones
    let query = ListTasksQuery {
        status: None,
        limit: Some(0),
        offset: Some(0),
    };
    assert_eq!(tasks_path(&query), "/tasks");

    let query = ListTasksQuery {
        status: Some(TaskStatusFilter::Active),
        limit: None,
        offset: Some(5),
    };
    assert_eq!(tasks_path(&query), "/tasks?status=active&offset=5");
}

#[test]
fn test_task_paths() {
    assert_eq!(task_path("12"), "/tasks/12");
    assert_eq!(toggle_path("12"), "/tasks/12/toggle-status");
}

#[test]
fn test_merge_headers_defaults() {
    let headers = merge_headers(Some("abc"), &HeaderMap::new());
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");

    let headers = merge_headers(None, &HeaderMap::new());
    assert!(headers.get(AUTHORIZATION).is_none());
}

#[test]
fn test_merge_headers_caller_wins() {
    let mut extra = HeaderMap::new();
    extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    extra.insert(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
    extra.insert("x-request-id", HeaderValue::from_static("r-1"));

    let headers = merge_headers(Some("abc"), &extra);
    assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic Zm9vOmJhcg==");
    assert_eq!(headers.get("x-request-id").unwrap(), "r-1");
}

#[test]
fn test_decode_response_status_failures() {
    let err = decode_response::<()>(404, br#"{"message":"Task not found"}"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::HttpStatus {
            status: 404,
            message: "Task not found".to_string()
        }
    );
    assert_eq!(err.code(), GENERIC_ERROR_CODE);

    // no message field, empty message and non-JSON bodies all fall back
    let bodies: [&[u8]; 4] = [
        br#"{"detail":"nope"}"#,
        br#"{"message":""}"#,
        b"<html>502</html>",
        b"",
    ];
    for body in bodies {
        let err = decode_response::<()>(502, body).unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.message(), "Request failed");
    }
}

#[test]
fn test_decode_response_success_bodies() {
    assert_eq!(decode_response::<()>(204, b""), Ok(()));
    assert_eq!(decode_response::<()>(200, br#"{"success":true}"#), Ok(()));

    let err = decode_response::<()>(200, b"not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.code(), GENERIC_ERROR_CODE);
}

#[tokio::test]
async fn test_list_tasks_maps_tasks_and_passes_totals() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/tasks")
        .match_query(Matcher::Exact("status=completed&limit=10&offset=20".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!({
            "tasks": [wire_task(21, true), wire_task(22, true)],
            "total": 31,
            "limit": 10,
            "offset": 20
        })))
        .create_async()
        .await;

    let client = client_for(&server, Some("abc"));
    let query = ListTasksQuery {
        status: Some(TaskStatusFilter::Completed),
        limit: Some(10),
        offset: Some(20),
    };
    let page = client.list_tasks(&query).await.unwrap();

    mock.assert_async().await;
    let ids: Vec<&str> = page.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["21", "22"]);
    assert!(page.tasks.iter().all(|t| t.is_completed));
    assert_eq!((page.total, page.limit, page.offset), (31, 10, 20));
}

#[tokio::test]
async fn test_request_carries_bearer_and_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/tasks/3")
        .match_header("authorization", "Bearer session-token")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(envelope(json!({ "task": wire_task(3, false) })))
        .create_async()
        .await;

    let task = client_for(&server, Some("session-token"))
        .get_task("3")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(task.id, "3");
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/tasks")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(envelope(json!({ "tasks": [], "total": 0, "limit": 50, "offset": 0 })))
        .create_async()
        .await;

    let page = client_for(&server, None)
        .list_tasks(&ListTasksQuery::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(page.tasks.is_empty());
}

#[tokio::test]
async fn test_session_provider_without_storage_or_cookie_sends_no_token() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/tasks/8")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"success":true,"data":null}"#)
        .create_async()
        .await;

    let provider = SessionTokenProvider::new(
        dir.path().join("session.json"),
        Some("theme=dark".to_string()),
    );
    let client = ApiClient::new(format!("{}/api", server.url()), Arc::new(provider));

    assert_eq!(client.delete_task("8").await, Ok(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_toggle_uses_patch_without_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/tasks/5/toggle-status")
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(envelope(json!({ "task": wire_task(5, true) })))
        .create_async()
        .await;

    let task = client_for(&server, Some("abc"))
        .toggle_task_completion("5")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(task.id, "5");
    assert!(task.is_completed);
}

#[tokio::test]
async fn test_create_task_posts_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/tasks")
        .match_body(Matcher::Json(json!({ "title": "Task 11", "priority": "high" })))
        .with_status(201)
        .with_body(envelope(json!({ "task": wire_task(11, false) })))
        .create_async()
        .await;

    let request = CreateTaskRequest {
        title: "Task 11".to_string(),
        description: None,
        due_date: None,
        priority: Some(Priority::High),
    };
    let task = client_for(&server, Some("abc"))
        .create_task(&request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(task.id, "11");
}

#[tokio::test]
async fn test_update_task_puts_only_set_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/tasks/4")
        .match_body(Matcher::Json(json!({ "title": "Renamed" })))
        .with_status(200)
        .with_body(envelope(json!({ "task": wire_task(4, false) })))
        .create_async()
        .await;

    let request = UpdateTaskRequest {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    let task = client_for(&server, Some("abc"))
        .update_task("4", &request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(task.id, "4");
}

#[tokio::test]
async fn test_http_error_uses_body_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/tasks/99")
        .with_status(404)
        .with_body(r#"{"message":"Task not found"}"#)
        .create_async()
        .await;

    let err = client_for(&server, Some("abc"))
        .get_task("99")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Task not found");
}

#[tokio::test]
async fn test_application_error_envelope() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(
            json!({
                "success": false,
                "error": { "code": "AUTH_001", "message": "Invalid credentials" }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client_for(&server, None)
        .login("ada@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Application {
            code: "AUTH_001".to_string(),
            message: "Invalid credentials".to_string()
        }
    );
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    // grab a free port and close it again so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{}/api", addr), Arc::new(NoToken));
    let err = client
        .list_tasks(&ListTasksQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }));
    assert_eq!(err.code(), GENERIC_ERROR_CODE);
    assert!(!err.message().is_empty());
}

#[tokio::test]
async fn test_login_and_signup_bodies() {
    let mut server = Server::new_async().await;
    let session = envelope(json!({
        "token": "new-token",
        "user": { "id": "u1", "email": "ada@example.com", "name": "Ada" }
    }));

    let login = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(json!({ "email": "ada@example.com", "password": "pw" })))
        .with_status(200)
        .with_body(session.clone())
        .create_async()
        .await;
    let register = server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(
            json!({ "email": "ada@example.com", "password": "pw", "name": "Ada" }),
        ))
        .with_status(200)
        .with_body(session)
        .create_async()
        .await;

    let client = client_for(&server, None);
    let logged_in = client.login("ada@example.com", "pw").await.unwrap();
    let signed_up = client.signup("ada@example.com", "pw", "Ada").await.unwrap();

    login.assert_async().await;
    register.assert_async().await;
    assert_eq!(logged_in.token, "new-token");
    assert_eq!(signed_up.user.name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_logout_accepts_empty_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/logout")
        .match_header("authorization", "Bearer abc")
        .with_status(204)
        .create_async()
        .await;

    assert_eq!(client_for(&server, Some("abc")).logout().await, Ok(()));
    mock.assert_async().await;
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://localhost:8000/api/", Arc::new(NoToken));
    assert_eq!(client.base_url(), "http://localhost:8000/api");
}
