use error_weave::{join, values, Error};

#[test]
fn test_compact_join_separators() {
    let err = join!(Error::new("a"), "b", "c");
    assert_eq!(err.to_string(), "a: b + c");
}

#[test]
fn test_compact_skips_empty_contributions() {
    // Annotations render empty in compact mode and must not leave
    // stray separators behind, wherever they sit in the member list.
    let leading = Error::join([Error::value("k", "v"), Error::msg("x")]);
    assert_eq!(leading.to_string(), "x");

    let middle = Error::join([Error::msg("x"), Error::value("k", "v"), Error::msg("y")]);
    assert_eq!(middle.to_string(), "x: y");

    let trailing = Error::join([Error::msg("x"), Error::value("k", "v")]);
    assert_eq!(trailing.to_string(), "x");
}

#[test]
fn test_compact_of_annotations_is_empty() {
    assert_eq!(Error::value("k", "v").to_string(), "");
    assert_eq!(values! { "k" => "v" }.to_string(), "");
}

#[test]
fn test_compact_nested_join_is_associative() {
    let err = Error::join([Error::msg("err1"), Error::join([Error::msg("err2"), Error::msg("sub")])]);
    assert_eq!(err.to_string(), "err1: err2: sub");
}

#[test]
fn test_verbose_contains_stack_block_and_value_line_in_chain_order() {
    let err = join!(Error::new("boom"), Error::value("k", "v"));
    let verbose = err.verbose();

    assert!(verbose.contains("stack\n"), "verbose output: {verbose:?}");
    assert!(verbose.contains("value: k \"v\""), "verbose output: {verbose:?}");

    let stack_at = verbose.find("stack\n").unwrap();
    let value_at = verbose.find("value: k").unwrap();
    assert!(stack_at < value_at, "stack member precedes the value member");
}

#[test]
fn test_verbose_stack_frames_are_tab_indented_lines() {
    let err = Error::new("boom");
    let verbose = err.verbose();

    let (_, frames) = verbose.split_once("stack\n").expect("stack header");
    assert!(!frames.is_empty());
    for line in frames.lines() {
        assert!(line.starts_with('\t'), "frame line not indented: {line:?}");
    }
}

#[test]
fn test_verbose_multi_value_line() {
    let err = values! { "b" => 2, "a" => 1 };
    // Key order is deterministic (sorted), not insertion order.
    assert_eq!(err.verbose(), "values: [a: \"1\" b: \"2\"]");
}

#[test]
fn test_verbose_join_separators() {
    let err = Error::join([Error::msg("main"), Error::msg("one"), Error::msg("two")]);
    assert_eq!(err.verbose(), "main: \tone\n\ttwo");
}

#[test]
fn test_quoted_wraps_compact() {
    let err = Error::new("a b");
    assert_eq!(err.quoted(), "\"a b\"");

    let escaped = Error::new("say \"hi\"");
    assert_eq!(escaped.quoted(), "\"say \\\"hi\\\"\"");
}

#[test]
fn test_alternate_display_is_verbose() {
    let err = join!(Error::new("boom"), Error::value("k", "v"));
    assert_eq!(format!("{err:#}"), err.verbose());
    assert_eq!(format!("{err}"), err.compact());
}

#[test]
fn test_string_values_render_bare_and_numbers_plain() {
    assert_eq!(Error::value("k", "text").verbose(), "value: k \"text\"");
    assert_eq!(Error::value("k", 7).verbose(), "value: k \"7\"");
    assert_eq!(Error::value("k", true).verbose(), "value: k \"true\"");
}
