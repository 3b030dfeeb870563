//! Integration tests for JSON-RPC 2.0 types.

use serde_json::json;
use wicket_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, RequestId,
};

#[test]
fn request_serialization() {
    let req = JsonRpcRequest::new(RequestId::Number(1), "tools/list", None);
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("\"jsonrpc\":\"2.0\""));
    assert!(json.contains("\"method\":\"tools/list\""));
}

#[test]
fn request_serde_roundtrip() {
    let req = JsonRpcRequest::new(RequestId::Number(1), "tools/call", Some(json!({"a": 1})));
    let s = serde_json::to_string(&req).expect("ser");
    let back: JsonRpcRequest = serde_json::from_str(&s).expect("de");
    assert_eq!(back.method, "tools/call");
    assert_eq!(back.id, RequestId::Number(1));
}

#[test]
fn request_without_id_decodes_to_null() {
    let s = r#"{"method":"initialize"}"#;
    let req: JsonRpcRequest = serde_json::from_str(s).expect("de");
    assert_eq!(req.id, RequestId::Null);
    assert_eq!(req.jsonrpc, "2.0");
}

#[test]
fn request_without_method_decodes_to_empty() {
    let s = r#"{"id":7}"#;
    let req: JsonRpcRequest = serde_json::from_str(s).expect("de");
    assert_eq!(req.method, "");
    assert_eq!(req.id, RequestId::Number(7));
}

#[test]
fn null_id_serializes_as_null() {
    let resp = JsonRpcErrorResponse::error(RequestId::Null, error_codes::PARSE_ERROR, "parse error");
    let s = serde_json::to_string(&resp).expect("ser");
    assert!(s.contains("\"id\":null"));
    assert!(s.contains("-32700"));
}

#[test]
fn response_roundtrip() {
    let resp = JsonRpcResponse::success(RequestId::String("abc".into()), json!({"tools": []}));
    let json = serde_json::to_string(&resp).unwrap();
    let back: JsonRpcResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, RequestId::String("abc".into()));
}

#[test]
fn error_response_structure() {
    let err = JsonRpcErrorResponse::error(
        RequestId::Number(1),
        error_codes::METHOD_NOT_FOUND,
        "unknown method: foo",
    );
    assert_eq!(err.error.code, -32601);
    assert_eq!(err.error.message, "unknown method: foo");
}

#[test]
fn request_id_number_vs_string() {
    assert_ne!(RequestId::Number(1), RequestId::String("1".into()));
    assert_eq!(RequestId::Number(42), RequestId::Number(42));
    assert_eq!(RequestId::default(), RequestId::Null);
}

#[test]
fn request_id_echoed_variants_roundtrip() {
    for id in [
        RequestId::Number(9),
        RequestId::String("req-9".into()),
        RequestId::Null,
    ] {
        let resp = JsonRpcResponse::success(id.clone(), json!(null));
        let s = serde_json::to_string(&resp).expect("ser");
        let back: JsonRpcResponse = serde_json::from_str(&s).expect("de");
        assert_eq!(back.id, id);
    }
}
