use recap::ai::{FALLBACK_SUMMARY, compose_prompt, estimate_tokens};

#[test]
fn test_compose_prompt_with_instruction() {
    let prompt = compose_prompt("Alice: let's ship v2 by Friday.", "Summarize as bullet points");
    assert_eq!(
        prompt,
        "Summarize as bullet points\n\nAlice: let's ship v2 by Friday."
    );
}

#[test]
fn test_compose_prompt_without_instruction() {
    // The client must still function with an empty instruction and send
    // the transcript alone.
    assert_eq!(compose_prompt("Alice: hello", ""), "Alice: hello");
    assert_eq!(compose_prompt("Alice: hello", "   "), "Alice: hello");
}

#[test]
fn test_fallback_summary_is_nonempty() {
    // The degrade-gracefully policy hands the caller this text instead of
    // an error when the provider returns no usable content.
    assert_eq!(FALLBACK_SUMMARY, "Could not generate summary.");
}

#[test]
fn test_estimate_tokens() {
    assert_eq!(estimate_tokens(""), 1);
    assert_eq!(estimate_tokens("abcd"), 2);
    assert!(estimate_tokens(&"a".repeat(400)) >= 100);
}
