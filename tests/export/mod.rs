use error_weave::{join, values, Error};

#[test]
fn test_info_round_trips_compact_message() {
    let err = join!(Error::new("err1"), "err2", Error::value("one", "two"));
    let info = err.info();
    assert_eq!(info.error_chain, err.compact());
    assert_eq!(info.error_chain, "err1: err2");
}

#[test]
fn test_info_collects_first_stack() {
    let err = join!(Error::new("boom"), "ctx");
    let info = err.info();
    assert!(!info.stack_traces.is_empty());
    for line in &info.stack_traces {
        assert!(line.contains(':'), "stack line: {line:?}");
    }
}

#[test]
fn test_info_without_stack_is_empty() {
    let err = Error::join([Error::msg("a"), Error::msg("b")]);
    let info = err.info();
    assert!(info.stack_traces.is_empty());
}

#[test]
fn test_first_occurrence_wins_flat() {
    let err = Error::join([Error::value("k", "v1"), Error::value("k", "v2")]);
    let values = err.merged_values();
    assert_eq!(values.len(), 1);
    assert_eq!(values["k"], "v1");
}

#[test]
fn test_first_occurrence_wins_nested() {
    let inner = Error::join([Error::msg("m"), Error::value("k", "v1")]);
    let err = Error::join([inner, Error::value("k", "v2")]);
    assert_eq!(err.merged_values()["k"], "v1");

    let inner = Error::value("k", "v2");
    let err = Error::join([Error::value("k", "v1"), Error::join([inner])]);
    assert_eq!(err.merged_values()["k"], "v1");
}

#[test]
fn test_values_merge_unions_single_and_multi() {
    let err = join!(
        Error::new("boom"),
        Error::value("single", 1),
        values! { "multi" => 2, "single" => 99 },
    );
    let values = err.merged_values();
    assert_eq!(values["single"], 1, "earlier single-value binding wins");
    assert_eq!(values["multi"], 2);
}

#[test]
fn test_info_values_match_merged_values() {
    let err = join!(Error::new("boom"), Error::value("k", "v"));
    assert_eq!(err.info().values, err.merged_values());
}

#[test]
fn test_export_does_not_mutate_the_chain() {
    let err = join!(Error::new("boom"), Error::value("k", "v"));
    let first = err.info();
    let second = err.info();
    assert_eq!(first.error_chain, second.error_chain);
    assert_eq!(first.values, second.values);
    assert_eq!(first.stack_traces, second.stack_traces);
}

#[test]
fn test_info_serializes_with_contract_field_names() {
    let err = join!(Error::new("boom"), Error::value("k", "v"));
    let json = serde_json::to_value(err.info()).expect("serializable record");

    let object = json.as_object().expect("object");
    assert!(object.contains_key("errorChain"));
    assert!(object.contains_key("stackTraces"));
    assert!(object.contains_key("values"));
    assert_eq!(json["values"]["k"], "v");
}
