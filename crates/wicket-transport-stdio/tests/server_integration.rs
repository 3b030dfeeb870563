//! Integration tests for the MCP stdio server loop.

use std::sync::Arc;

use serde_json::Value;
use wicket_store_sqlite::MatchStore;
use wicket_tools::build_registry;
use wicket_transport_stdio::{McpHandler, McpServer, StdioTransport};

fn make_handler(dir: &tempfile::TempDir) -> McpHandler {
    let store = MatchStore::open(dir.path().join("test.db")).expect("db");
    let registry = build_registry(Arc::new(store)).expect("registry");
    McpHandler::new(registry)
}

async fn run_session(input: &str) -> Vec<Value> {
    let dir = tempfile::tempdir().expect("tempdir");
    let reader = tokio::io::BufReader::new(input.as_bytes());
    let mut output = Vec::new();
    let transport = StdioTransport::new(reader, &mut output);
    let mut server = McpServer::new(transport, make_handler(&dir));
    server.run().await.expect("run");
    String::from_utf8(output)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("response line"))
        .collect()
}

#[tokio::test]
async fn server_handles_valid_request() {
    let responses = run_session("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\"}\n").await;
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["jsonrpc"], "2.0");
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "wicket");
}

#[tokio::test]
async fn server_returns_parse_error_with_null_id_on_garbage() {
    let responses = run_session("not json at all\n").await;
    assert_eq!(responses.len(), 1);
    assert!(responses[0]["id"].is_null());
    assert_eq!(responses[0]["error"]["code"], -32700);
}

#[tokio::test]
async fn server_continues_after_a_failed_request() {
    let input = "garbage\n{\"id\":2,\"method\":\"tools/list\"}\n";
    let responses = run_session(input).await;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(
        responses[1]["result"]["tools"]
            .as_array()
            .expect("tools")
            .len(),
        7
    );
}

#[tokio::test]
async fn server_skips_blank_lines() {
    let input = "\n\n{\"id\":3,\"method\":\"initialize\"}\n";
    let responses = run_session(input).await;
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 3);
}

#[tokio::test]
async fn server_eof_shuts_down_cleanly() {
    let responses = run_session("").await;
    assert!(responses.is_empty());
}

#[tokio::test]
async fn server_answers_requests_without_id_using_null() {
    let responses = run_session("{\"method\":\"prompts/list\"}\n").await;
    assert_eq!(responses.len(), 1);
    assert!(responses[0]["id"].is_null());
    assert!(responses[0]["result"]["prompts"]
        .as_array()
        .expect("prompts")
        .is_empty());
}

#[tokio::test]
async fn server_unknown_method_returns_error() {
    let responses = run_session("{\"id\":4,\"method\":\"foo/bar\"}\n").await;
    assert_eq!(responses[0]["error"]["code"], -32601);
    assert!(responses[0]["error"]["message"]
        .as_str()
        .expect("msg")
        .contains("foo/bar"));
}

#[tokio::test]
async fn full_tool_call_over_the_wire() {
    let input = "{\"id\":5,\"method\":\"tools/call\",\"params\":{\"name\":\"get_venue_info\",\"arguments\":{}}}\n";
    let responses = run_session(input).await;
    let text = responses[0]["result"]["content"][0]["text"]
        .as_str()
        .expect("text");
    let inner: Value = serde_json::from_str(text).expect("inner");
    assert_eq!(inner["total_venues"], 0);
}
