use std::error::Error as StdError;
use std::io;

use error_weave::{join, values, wrap, Error, ErrorKind};

#[test]
fn test_join_promotes_strings() {
    let err = join!(Error::new("err1"), "a_string", Error::new("bla"));
    let members = err.members().expect("join node");
    assert_eq!(members.len(), 3);
    assert_eq!(members[1].kind(), ErrorKind::Message);
    assert_eq!(err.to_string(), "err1: a_string + bla");
}

#[test]
fn test_join_drops_none_members() {
    let err = join!(Error::new("err1"), Option::<Error>::None, Error::new("err2"));
    let members = err.members().expect("join node");
    assert_eq!(members.len(), 2);
    assert_eq!(err.to_string(), "err1: err2");
}

#[test]
fn test_join_adopts_boxed_errors() {
    let boxed: Box<dyn StdError + Send + Sync> =
        Box::new(io::Error::new(io::ErrorKind::NotFound, "gone"));
    let err = join!(Error::new("lookup failed"), boxed);
    assert_eq!(err.to_string(), "lookup failed: gone");
}

#[test]
fn test_join_owned_string_member() {
    let fragment = String::from("owned");
    let err = join!(Error::new("head"), fragment);
    assert_eq!(err.to_string(), "head: owned");
}

#[test]
fn test_join_appends_stack_only_when_missing() {
    let stacked = join!(Error::new("has stack"), "note");
    assert_eq!(stacked.members().map(|members| members.len()), Some(2));

    let bare = join!(Error::msg("no stack"), "note");
    assert_eq!(bare.members().map(|members| members.len()), Some(3));
    assert!(bare.has_stack());
}

#[test]
fn test_wrap_substitutes_compact_message() {
    let base = Error::new("connection refused");
    let err = wrap!(base, "dialing upstream: {}");
    assert_eq!(err.to_string(), "dialing upstream: connection refused");
}

#[test]
fn test_wrap_placeholder_position_is_free() {
    let base = Error::new("timeout");
    let err = wrap!(base, "{} while flushing");
    assert_eq!(err.to_string(), "timeout while flushing");
}

#[test]
fn test_wrap_ensures_stack() {
    let err = wrap!(Error::msg("bare"), "ctx: {}");
    assert!(err.has_stack());
    assert!(err.stack_frames().is_some());
}

#[test]
fn test_values_macro_builds_multi_value_node() {
    let err = values! {
        "host" => "db-01",
        "retries" => 3,
        "fatal" => true,
    };
    assert_eq!(err.kind(), ErrorKind::MultiValue);

    let map = err.value_map().expect("multi-value node");
    assert_eq!(map["host"], "db-01");
    assert_eq!(map["retries"], 3);
    assert_eq!(map["fatal"], true);
}

#[test]
fn test_values_macro_empty() {
    let err = values! {};
    assert_eq!(err.kind(), ErrorKind::MultiValue);
    assert!(err.value_map().expect("multi-value node").is_empty());
}
