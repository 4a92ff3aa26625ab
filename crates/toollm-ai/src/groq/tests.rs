use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::*;
use crate::tools::builtin_tools;
use crate::{AiClient, AiError, Message, Role, ToolCall};

fn client_for(base_url: &str) -> GroqClient {
    GroqClient::new(GroqConfig::new("test-key").with_base_url(base_url)).unwrap()
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn search_call() -> ToolCall {
    ToolCall {
        id: "call_abc".into(),
        name: "webSearch".into(),
        arguments: json!({ "query": "weather in Bangalore" }),
    }
}

#[test]
fn request_body_carries_model_temperature_and_tools() {
    let client = client_for("http://unused");
    let body = client.build_request_body(&[Message::user("hi")], &builtin_tools());

    assert_eq!(body["model"], "llama-3.3-70b-versatile");
    assert_eq!(body["temperature"], 0.0);
    assert_eq!(body["tool_choice"], "auto");
    assert_eq!(body["tools"][0]["type"], "function");
    assert_eq!(body["tools"][0]["function"]["name"], "webSearch");
    assert!(body.get("max_tokens").is_none());
}

#[test]
fn request_body_omits_tools_when_none_offered() {
    let client = client_for("http://unused");
    let body = client.build_request_body(&[Message::user("hi")], &[]);
    assert!(body.get("tools").is_none());
    assert!(body.get("tool_choice").is_none());
}

#[test]
fn assistant_tool_calls_are_encoded_with_string_arguments() {
    let client = client_for("http://unused");
    let call = search_call();
    let messages = vec![
        Message::system("be brief"),
        Message::user("weather?"),
        Message::assistant("", vec![call.clone()]),
        Message::tool_result(&call, "27°C, partly cloudy"),
    ];

    let body = client.build_request_body(&messages, &[]);
    let msgs = body["messages"].as_array().unwrap();

    assert_eq!(msgs[0], json!({ "role": "system", "content": "be brief" }));
    assert_eq!(msgs[2]["content"], Value::Null);
    assert_eq!(msgs[2]["tool_calls"][0]["id"], "call_abc");
    assert_eq!(msgs[2]["tool_calls"][0]["type"], "function");
    let args = msgs[2]["tool_calls"][0]["function"]["arguments"]
        .as_str()
        .unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(args).unwrap(),
        json!({ "query": "weather in Bangalore" })
    );
    assert_eq!(msgs[3]["role"], "tool");
    assert_eq!(msgs[3]["tool_call_id"], "call_abc");
    assert_eq!(msgs[3]["name"], "webSearch");
}

#[test]
fn parse_plain_reply() {
    let client = client_for("http://unused");
    let response = client
        .parse_response(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Hello!" } }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 3 }
        }))
        .unwrap();

    assert_eq!(response.content, "Hello!");
    assert!(response.tool_calls.is_empty());
    assert_eq!(response.usage.input_tokens, 12);
    assert_eq!(response.usage.output_tokens, 3);
}

#[test]
fn parse_tool_calls_with_null_content() {
    let client = client_for("http://unused");
    let response = client
        .parse_response(json!({
            "choices": [{ "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": { "name": "webSearch", "arguments": "{\"query\":\"rust news\"}" }
                }]
            } }]
        }))
        .unwrap();

    assert_eq!(response.content, "");
    assert_eq!(response.tool_calls.len(), 1);
    assert_eq!(response.tool_calls[0].id, "call_1");
    assert_eq!(response.tool_calls[0].arguments, json!({ "query": "rust news" }));
    assert_eq!(response.usage.total_tokens(), 0);
}

#[test]
fn parse_keeps_malformed_arguments_as_string() {
    let client = client_for("http://unused");
    let response = client
        .parse_response(json!({
            "choices": [{ "message": {
                "tool_calls": [{
                    "id": "call_1",
                    "function": { "name": "webSearch", "arguments": "{not json" }
                }]
            } }]
        }))
        .unwrap();

    assert_eq!(response.tool_calls[0].arguments, json!("{not json"));
}

#[test]
fn parse_without_choices_is_error() {
    let client = client_for("http://unused");
    let err = client.parse_response(json!({ "choices": [] })).unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[test]
fn parse_choice_without_message_is_error() {
    let client = client_for("http://unused");
    for body in [
        json!({ "choices": [{}] }),
        json!({ "choices": [{ "message": null }] }),
    ] {
        let err = client.parse_response(body).unwrap_err();
        assert!(
            matches!(&err, AiError::ParseError(msg) if msg == "response choice has no message"),
            "unexpected error: {err:?}"
        );
    }
}

#[test]
fn debug_redacts_api_key() {
    let config = GroqConfig::new("gsk_secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("gsk_secret"));
    assert!(debug.contains("[REDACTED]"));
}

#[tokio::test]
async fn send_message_posts_to_chat_completions() {
    let app = Router::new().route(
        "/chat/completions",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            assert_eq!(
                headers.get("authorization").and_then(|v| v.to_str().ok()),
                Some("Bearer test-key")
            );
            assert_eq!(body["messages"][0]["role"], "user");
            Json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "pong" } }],
                "usage": { "prompt_tokens": 5, "completion_tokens": 1 }
            }))
        }),
    );
    let base = serve(app).await;

    let client = client_for(&base);
    let response = client
        .send_message(&[Message::user("ping")], &builtin_tools())
        .await
        .unwrap();

    assert_eq!(response.content, "pong");
    assert_eq!(response.usage.input_tokens, 5);
    assert_eq!(client.name(), "groq");
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limited() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let base = serve(app).await;

    let err = client_for(&base)
        .send_message(&[Message::user("ping")], &[])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::RateLimited));
}

#[tokio::test]
async fn server_error_maps_to_api_error_with_status() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let base = serve(app).await;

    let err = client_for(&base)
        .send_message(&[Message::user("ping")], &[])
        .await
        .unwrap_err();
    match err {
        AiError::ApiError(msg) => {
            assert!(msg.contains("502"));
            assert!(msg.contains("upstream down"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[test]
fn role_strings_match_wire_format() {
    assert_eq!(Role::Tool.as_str(), "tool");
    assert_eq!(
        serde_json::to_value(Role::Assistant).unwrap(),
        json!("assistant")
    );
}
