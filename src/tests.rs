use super::*;

fn doc(slides: &[String]) -> String {
    slides.join("---\n")
}

fn slide_source(url: &str, body: &str) -> String {
    format!("<!-- meta\nurl: {}\n-->\n{}\n", url, body)
}

#[test]
fn test_extract_meta_captures_content_and_span() {
    let segment = "<!-- meta\nurl: a\n-->\n# Hi";
    let meta = extract_meta(segment).expect("extraction should succeed");

    assert_eq!(meta.text, "\nurl: a\n");
    assert_eq!(meta.span, "<!-- meta\nurl: a\n-->".len());
    assert_eq!(&segment[meta.span..], "\n# Hi");
}

#[test]
fn test_extract_meta_empty_content_is_valid() {
    let meta = extract_meta("<!-- meta-->\nbody").expect("empty metadata is valid");
    assert_eq!(meta.text, "");
    assert_eq!(meta.span, "<!-- meta-->".len());
}

#[test]
fn test_extract_meta_missing_marker_fails() {
    let result = extract_meta("# Just markdown, no metadata");
    assert!(matches!(result, Err(DeckError::MetaMissingError(_))));
}

#[test]
fn test_extract_meta_marker_not_at_start_fails() {
    let result = extract_meta("\n<!-- meta\nurl: a\n-->");
    assert!(matches!(result, Err(DeckError::MetaMissingError(_))));
}

#[test]
fn test_extract_meta_unterminated_block_fails() {
    let result = extract_meta("<!-- meta\nurl: a\n# Hi");
    assert!(matches!(result, Err(DeckError::MetaUnterminatedError(_))));
}

#[test]
fn test_split_slides_segment_count() {
    let source = "first\n---\nsecond\n---\nthird\n";
    let segments = split_slides(source);
    assert_eq!(segments, vec!["first\n", "second\n", "third\n"]);
}

#[test]
fn test_split_slides_single_segment_without_separator() {
    assert_eq!(split_slides("only slide\n"), vec!["only slide\n"]);
}

#[test]
fn test_split_slides_passes_empty_segments_through() {
    // A leading separator produces an empty first segment; it is not
    // filtered here and fails later at metadata extraction.
    let segments = split_slides("---\nfirst\n");
    assert_eq!(segments, vec!["", "first\n"]);
}

#[test]
fn test_split_slides_requires_standalone_separator_line() {
    let source = "a---\nb\n----\nc\n";
    assert_eq!(split_slides(source), vec![source]);
}

#[test]
fn test_split_slides_handles_crlf_separator() {
    let segments = split_slides("first\r\n---\r\nsecond\r\n");
    assert_eq!(segments, vec!["first\r\n", "second\r\n"]);
}

#[test]
fn test_parse_slide_slices_body_after_metadata() {
    let segment = "<!-- meta\nurl: intro.html\n-->\n# Intro\n";
    let raw = parse_slide(segment).expect("parse should succeed");

    assert_eq!(raw.meta.text, "\nurl: intro.html\n");
    assert_eq!(raw.body, "\n# Intro\n");
}

#[test]
fn test_transform_slide_parses_metadata_and_renders_body() {
    let segment = "<!-- meta\nurl: intro.html\ntitle: Welcome\n-->\n# Intro\n\nSome *text*.\n";
    let raw = parse_slide(segment).unwrap();
    let slide = transform_slide(&raw).expect("transform should succeed");

    assert_eq!(slide.url, "intro.html");
    assert_eq!(
        slide.meta.get("title").and_then(|v| v.as_str()),
        Some("Welcome")
    );
    assert!(slide.content.contains("<h1>Intro</h1>"));
    assert!(slide.content.contains("<em>text</em>"));
    assert_eq!(slide.navigation, Navigation::default());
}

#[test]
fn test_transform_slide_missing_url_fails() {
    let raw = parse_slide("<!-- meta\ntitle: No url here\n-->\nbody").unwrap();
    let result = transform_slide(&raw);
    assert!(matches!(result, Err(DeckError::MissingUrlError(_))));
}

#[test]
fn test_transform_slide_malformed_yaml_fails() {
    let raw = parse_slide("<!-- meta\nurl: [broken\n-->\nbody").unwrap();
    let result = transform_slide(&raw);
    assert!(matches!(result, Err(DeckError::MetaParseError(_))));
}

#[test]
fn test_transform_slide_scalar_metadata_fails() {
    let raw = parse_slide("<!-- meta\njust a string\n-->\nbody").unwrap();
    let result = transform_slide(&raw);
    assert!(matches!(result, Err(DeckError::ValidationError(_))));
}

#[test]
fn test_transform_slide_malformed_markdown_is_not_fatal() {
    let raw = parse_slide("<!-- meta\nurl: a.html\n-->\n*unclosed emphasis\n").unwrap();
    let slide = transform_slide(&raw).expect("markdown rendering is best-effort");
    assert!(slide.content.contains("unclosed emphasis"));
}

#[test]
fn test_render_markdown_allows_raw_html() {
    let html = render_markdown("<div class=\"note\">hi</div>\n");
    assert!(html.contains("<div class=\"note\">hi</div>"));
}

#[test]
fn test_process_slides_preserves_document_order() {
    let source = doc(&[
        slide_source("a.html", "# A"),
        slide_source("b.html", "# B"),
        slide_source("c.html", "# C"),
    ]);
    let slides = process_slides(&source).expect("processing should succeed");

    let urls: Vec<&str> = slides.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(urls, vec!["a.html", "b.html", "c.html"]);
}

#[test]
fn test_normalize_links_adjacent_slides() {
    let source = doc(&[
        slide_source("a", "# A"),
        slide_source("b", "# B"),
        slide_source("c", "# C"),
    ]);
    let slides = assemble_slides(&source).expect("assembly should succeed");

    assert_eq!(slides[0].navigation.prev, None);
    assert_eq!(slides[0].navigation.next.as_deref(), Some("b"));
    assert_eq!(slides[1].navigation.prev.as_deref(), Some("a"));
    assert_eq!(slides[1].navigation.next.as_deref(), Some("c"));
    assert_eq!(slides[2].navigation.prev.as_deref(), Some("b"));
    assert_eq!(slides[2].navigation.next, None);
}

#[test]
fn test_normalize_single_slide_has_no_links() {
    let slides = assemble_slides(&slide_source("only", "# Only")).unwrap();
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].navigation, Navigation::default());
}

#[test]
fn test_normalize_duplicate_url_is_a_hard_error() {
    let source = doc(&[slide_source("same", "# One"), slide_source("same", "# Two")]);
    let slides = process_slides(&source).unwrap();
    let result = normalize_slides(&slides);
    assert!(matches!(result, Err(DeckError::DuplicateUrlError(url)) if url == "same"));
}

#[test]
fn test_normalize_does_not_mutate_input_records() {
    let source = doc(&[slide_source("a", "# A"), slide_source("b", "# B")]);
    let slides = process_slides(&source).unwrap();
    let linked = normalize_slides(&slides).unwrap();

    assert_eq!(slides[0].navigation, Navigation::default());
    assert_eq!(linked[0].navigation.next.as_deref(), Some("b"));
}

#[test]
fn test_assemble_slides_is_deterministic() {
    let source = doc(&[
        slide_source("a", "# A\n\n- one\n- two"),
        slide_source("b", "Some `code` and *emphasis*."),
    ]);
    let first = assemble_slides(&source).unwrap();
    let second = assemble_slides(&source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_assemble_slides_malformed_slide_aborts_whole_build() {
    let source = doc(&[slide_source("a", "# A"), "# No metadata block here\n".to_string()]);
    let result = assemble_slides(&source);
    assert!(matches!(result, Err(DeckError::MetaMissingError(_))));
}

#[test]
fn test_page_renderer_substitutes_slide_fields() {
    let source = doc(&[slide_source("a", "# A"), slide_source("b", "# B")]);
    let mut presentation = Presentation::new(
        source,
        "{{ slide.url }}|{{ slide.content }}".to_string(),
    );
    presentation.assemble().unwrap();

    let renderer = PageRenderer::new(&presentation.templates.page).unwrap();
    let html = renderer.render(&presentation, &presentation.slides[0]).unwrap();

    assert!(html.starts_with("a|"));
    // The rendered fragment must pass through unescaped.
    assert!(html.contains("<h1>A</h1>"));
}

#[test]
fn test_page_renderer_exposes_navigation_in_context() {
    let source = doc(&[slide_source("a", "# A"), slide_source("b", "# B")]);
    let mut presentation = Presentation::new(
        source,
        "{% if slide.navigation.next %}next={{ slide.navigation.next }}{% endif %}".to_string(),
    );
    presentation.assemble().unwrap();

    let renderer = PageRenderer::new(&presentation.templates.page).unwrap();
    let first = renderer.render(&presentation, &presentation.slides[0]).unwrap();
    let last = renderer.render(&presentation, &presentation.slides[1]).unwrap();

    assert_eq!(first, "next=b");
    assert_eq!(last, "");
}

#[test]
fn test_page_renderer_invalid_template_fails() {
    let result = PageRenderer::new("{% if %}");
    assert!(matches!(result, Err(DeckError::TemplateError(_))));
}
