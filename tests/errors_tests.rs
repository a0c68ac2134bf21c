use std::error::Error;

use recap::errors::PipelineError;

#[test]
fn test_pipeline_error_implements_error_trait() {
    // Verify PipelineError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = PipelineError::Provider("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_pipeline_error_display() {
    let error = PipelineError::Provider("model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Summarization provider request failed: model unavailable"
    );

    let error = PipelineError::Transport("connection refused".to_string());
    assert_eq!(format!("{error}"), "Mail delivery failed: connection refused");

    let error = PipelineError::Persistence("disk full".to_string());
    assert_eq!(format!("{error}"), "History store unavailable: disk full");

    let error = PipelineError::Validation("transcript must not be empty".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid request: transcript must not be empty"
    );
}

#[test]
fn test_pipeline_error_from_conversions() {
    // SQLite errors fold into the persistence class
    let err = rusqlite::Error::InvalidQuery;
    let pipeline_err: PipelineError = err.into();
    assert!(matches!(pipeline_err, PipelineError::Persistence(_)));

    // So do serialization errors from the recipients column
    let err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
    let pipeline_err: PipelineError = err.into();
    assert!(matches!(pipeline_err, PipelineError::Persistence(_)));
}
