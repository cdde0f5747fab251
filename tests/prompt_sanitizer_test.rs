use lexgate::infrastructure::observability::sanitize_prompt;

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_prompt("  review this NDA  "), "review this NDA");
}

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "x".repeat(250);
    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"x".repeat(100)));
    assert!(sanitized.ends_with("(250 chars total)"));
}

#[test]
fn given_credential_in_prompt_when_sanitizing_then_redacts_value() {
    let sanitized = sanitize_prompt("call with api_key=sk-123456 attached");

    assert!(sanitized.contains("api_key=[REDACTED]"));
    assert!(!sanitized.contains("sk-123456"));
}
