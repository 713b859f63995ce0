use cliphub_client::{Error, HubClient};
use cliphub_types::ClipId;
use mockito::{Matcher, Server};

fn client_for(server: &Server) -> HubClient {
    HubClient::new(&format!("{}/api/clips", server.url())).unwrap()
}

#[tokio::test]
async fn fetch_clips_preserves_backend_order_and_sends_marker_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/clips")
        .match_header("x-requested-with", "XMLHttpRequest")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status": "success", "data": [
                {"id": 2, "content": "second", "created_at": "2024-02-01 00:00:00", "updated_at": ""},
                {"id": 1, "content": "first", "created_at": "2024-01-01 00:00:00", "updated_at": ""}
            ]}"#,
        )
        .create_async()
        .await;

    let clips = client_for(&server).fetch_clips().await.unwrap();

    mock.assert_async().await;
    assert_eq!(clips.len(), 2);
    assert_eq!(clips[0].content, "second");
    assert_eq!(clips[1].content, "first");
}

#[tokio::test]
async fn fetch_clips_treats_missing_data_as_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/clips")
        .with_status(200)
        .with_body(r#"{"status": "success"}"#)
        .create_async()
        .await;

    let clips = client_for(&server).fetch_clips().await.unwrap();
    assert!(clips.is_empty());
}

#[tokio::test]
async fn create_clip_posts_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/clips")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({"content": "hello"})))
        .with_status(201)
        .with_body(
            r#"{"status": "success", "data":
                {"id": 7, "content": "hello", "created_at": "2024-03-01 09:00:00", "updated_at": "2024-03-01 09:00:00"}}"#,
        )
        .create_async()
        .await;

    let clip = client_for(&server).create_clip("hello").await.unwrap();

    mock.assert_async().await;
    assert_eq!(clip.id, ClipId::from("7"));
    assert_eq!(clip.content, "hello");
}

#[tokio::test]
async fn update_clip_escapes_id_in_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/clips/a%20b")
        .match_body(Matcher::Json(serde_json::json!({"content": "new text"})))
        .with_status(200)
        .with_body(
            r#"{"status": "success", "data":
                {"id": "a b", "content": "new text", "created_at": "2024-03-01 09:00:00", "updated_at": "2024-03-02 10:00:00"}}"#,
        )
        .create_async()
        .await;

    let clip = client_for(&server)
        .update_clip(&ClipId::from("a b"), "new text")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(clip.content, "new text");
}

#[tokio::test]
async fn delete_clip_ignores_envelope_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/clips/5")
        .with_status(200)
        .with_body(r#"{"status": "success", "data": {"anything": true}}"#)
        .create_async()
        .await;

    client_for(&server)
        .delete_clip(&ClipId::from("5"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn backend_error_message_is_surfaced_verbatim() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/api/clips/99")
        .with_status(404)
        .with_body(r#"{"status": "error", "message": "Clip not found."}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .update_clip(&ClipId::from("99"), "text")
        .await
        .unwrap_err();

    match err {
        Error::Api(message) => assert_eq!(message, "Clip not found."),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn error_without_message_gets_generic_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/clips")
        .with_status(500)
        .with_body(r#"{"status": "error"}"#)
        .create_async()
        .await;

    let err = client_for(&server).fetch_clips().await.unwrap_err();
    assert_eq!(err.to_string(), "Unknown API error.");
}

#[tokio::test]
async fn non_json_body_is_an_invalid_response() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/clips")
        .with_status(200)
        .with_body("<html>gateway error</html>")
        .create_async()
        .await;

    let err = client_for(&server).fetch_clips().await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse));
}

#[tokio::test]
async fn create_without_data_is_an_invalid_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/clips")
        .with_status(201)
        .with_body(r#"{"status": "success"}"#)
        .create_async()
        .await;

    let err = client_for(&server).create_clip("hello").await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse));
}

#[test]
fn rejects_base_url_without_scheme() {
    assert!(HubClient::new("not a url").is_err());
}
