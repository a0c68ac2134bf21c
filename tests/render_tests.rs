use recap::render::render_markdown;

/// Tests for the markdown renderer.
/// Rendering must stay pure and deterministic: the store compares and
/// persists its output verbatim.

#[test]
fn test_render_is_deterministic() {
    let input = "# Minutes\n\n- ship v2 by **Friday**\n- Bob owns the rollout";
    assert_eq!(render_markdown(input), render_markdown(input));
}

#[test]
fn test_render_empty_input() {
    let output = render_markdown("");
    assert!(
        output.trim().is_empty(),
        "Empty input should yield an empty fragment, got: {output:?}"
    );
}

#[test]
fn test_render_bullet_list() {
    let output = render_markdown("- first point\n- second point");
    assert!(output.contains("<ul>"), "List should render as <ul>: {output}");
    assert!(
        output.contains("<li>first point</li>"),
        "List items should render as <li>: {output}"
    );
}

#[test]
fn test_render_emphasis_and_headings() {
    let output = render_markdown("# Decisions\n\nShip **v2** by Friday.");
    assert!(output.contains("<h1>Decisions</h1>"));
    assert!(output.contains("<strong>v2</strong>"));
}

#[test]
fn test_render_escapes_embedded_scripts() {
    let output = render_markdown("before <script>alert('x')</script> after");
    assert!(
        !output.contains("<script>"),
        "Raw script tags must not survive rendering: {output}"
    );
    assert!(
        output.contains("&lt;script&gt;"),
        "Script tags should be escaped to literal text: {output}"
    );
}

#[test]
fn test_render_malformed_markup_degrades_to_text() {
    // Unbalanced emphasis is not an error, just literal-ish output
    let output = render_markdown("**unclosed emphasis");
    assert!(output.contains("unclosed emphasis"));
}
