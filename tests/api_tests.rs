use recap::api::{DistributeRequest, DistributeResponse, FetchHistoryRequest, SummarizeRequest};

/// Tests for the entry-point DTO shapes.
/// These pin down the wire format an external shell relies on.

#[test]
fn test_summarize_request_shape() {
    let request: SummarizeRequest = serde_json::from_str(
        r#"{"transcript": "Alice: hello", "instruction": "Summarize as bullet points"}"#,
    )
    .unwrap();

    assert_eq!(request.transcript, "Alice: hello");
    assert_eq!(request.instruction, "Summarize as bullet points");
}

#[test]
fn test_summarize_request_instruction_defaults_to_empty() {
    let request: SummarizeRequest =
        serde_json::from_str(r#"{"transcript": "Alice: hello"}"#).unwrap();
    assert!(request.instruction.is_empty());
}

#[test]
fn test_distribute_request_accepts_recipient_string() {
    let request: DistributeRequest = serde_json::from_str(
        r#"{"summaryText": "- done", "recipients": "a@x.com, b@x.com"}"#,
    )
    .unwrap();

    assert_eq!(
        request.recipients.normalize(),
        vec!["a@x.com".to_string(), "b@x.com".to_string()]
    );
}

#[test]
fn test_distribute_request_accepts_recipient_array() {
    let request: DistributeRequest = serde_json::from_str(
        r#"{"summaryText": "- done", "recipients": ["a@x.com", "b@x.com"]}"#,
    )
    .unwrap();

    assert_eq!(
        request.recipients.normalize(),
        vec!["a@x.com".to_string(), "b@x.com".to_string()]
    );
}

#[test]
fn test_fetch_history_request_limit_defaults_to_ten() {
    let request: FetchHistoryRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request.limit, 10);

    let request: FetchHistoryRequest = serde_json::from_str(r#"{"limit": 3}"#).unwrap();
    assert_eq!(request.limit, 3);
}

#[test]
fn test_distribute_failure_response_shape() {
    let response = DistributeResponse {
        success: false,
        recorded: None,
        record_id: None,
        receipt: None,
        error_message: Some("Mail delivery failed: connection refused".to_string()),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], serde_json::json!(false));
    assert_eq!(
        value["errorMessage"],
        serde_json::json!("Mail delivery failed: connection refused")
    );
    assert!(
        value.get("receipt").is_none(),
        "Failure responses omit the receipt entirely"
    );
}
