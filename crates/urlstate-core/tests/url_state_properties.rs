//! End-to-end behavior of the synchronizer over an in-memory router, plus a
//! router that refuses to navigate.

use anyhow::Result;
use urlstate_core::{
    DefaultMap, HistoryMode, MemoryRouter, QueryParams, Router, StateValue, UrlState,
};

fn search_defaults() -> DefaultMap {
    [
        ("a", StateValue::from("")),
        ("b", StateValue::from(0)),
        ("count", StateValue::from(0)),
        ("tags", StateValue::List(Vec::new())),
        ("open", StateValue::from(false)),
    ]
    .into_iter()
    .collect()
}

fn synchronizer(href: &str) -> UrlState<MemoryRouter> {
    UrlState::builder(MemoryRouter::new(href).unwrap())
        .defaults(search_defaults())
        .exclude(["token"])
        .build()
        .unwrap()
}

#[test]
fn every_absent_key_reads_as_default() {
    let s = synchronizer("/search?unrelated=1");
    let state = s.state();
    for (key, default) in search_defaults().iter() {
        assert_eq!(state.get(key), Some(default), "key {key}");
    }
}

#[test]
fn numeric_value_is_coerced() {
    let s = synchronizer("/search?count=5");
    assert_eq!(s.state()["count"], StateValue::Number(5.0));
}

#[test]
fn set_many_then_state_and_excluded_key_never_written() {
    let mut s = synchronizer("/search?token=secret&open=true");
    s.set_many([("a", StateValue::from("x")), ("b", StateValue::from(2))])
        .unwrap();

    let state = s.state();
    assert_eq!(state["a"], StateValue::from("x"));
    assert_eq!(state["b"], StateValue::Number(2.0));
    assert_eq!(state["open"], StateValue::Bool(true));
    assert_eq!(state["count"], StateValue::Number(0.0));

    let href = s.router().last_navigation().unwrap();
    assert!(!href.contains("token"), "{href}");
}

#[test]
fn list_write_yields_exactly_the_new_entries() {
    let mut s = synchronizer("/search?tags=stale&tags=older");
    s.set("tags", vec!["a", "b"]).unwrap();
    let href = s.router().last_navigation().unwrap().to_string();
    let query = QueryParams::parse(href.split_once('?').unwrap().1);
    assert_eq!(query.get_all("tags"), vec!["a", "b"]);
}

#[test]
fn reset_restores_modified_scalars() {
    let mut s = synchronizer("/search");
    s.set_many([
        ("a", StateValue::from("x")),
        ("count", StateValue::from(9)),
        ("open", StateValue::from(true)),
    ])
    .unwrap();
    assert!(s.is_modified());

    s.reset().unwrap();
    let state = s.state();
    assert_eq!(state["a"], StateValue::from(""));
    assert_eq!(state["count"], StateValue::Number(0.0));
    assert_eq!(state["open"], StateValue::Bool(false));
    assert!(!s.is_modified());
}

#[test]
fn modified_values_with_string_number_and_list() {
    let s = synchronizer("/search?a=hello&count=0&tags=x&tags=y");
    let modified = s.modified_values();
    let keys: Vec<&str> = modified.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "tags"]);
}

#[test]
fn rapid_writes_apply_in_call_order() {
    let mut s = synchronizer("/search");
    for n in 1..=3 {
        s.set("count", n).unwrap();
    }
    let hrefs: Vec<&str> = s
        .router()
        .navigations()
        .iter()
        .map(|(_, href)| href.as_str())
        .collect();
    assert_eq!(
        hrefs,
        vec!["/search?count=1", "/search?count=2", "/search?count=3"]
    );
    assert_eq!(s.get("count"), Some(StateValue::Number(3.0)));
}

#[test]
fn back_navigation_changes_derived_state() {
    let mut s = synchronizer("/search");
    s.set("a", "first").unwrap();
    s.set("a", "second").unwrap();
    assert!(s.router_mut().back());
    assert_eq!(s.get("a"), Some(StateValue::from("first")));
}

/// Router whose navigation primitives always fail.
struct OfflineRouter;

#[derive(Debug)]
struct RouterUnavailable;

impl std::fmt::Display for RouterUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "router unavailable")
    }
}

impl std::error::Error for RouterUnavailable {}

impl Router for OfflineRouter {
    fn pathname(&self) -> String {
        "/offline".to_string()
    }

    fn query(&self) -> QueryParams {
        QueryParams::parse("count=4")
    }

    fn push(&mut self, _href: &str) -> Result<()> {
        Err(RouterUnavailable.into())
    }

    fn replace(&mut self, _href: &str) -> Result<()> {
        Err(RouterUnavailable.into())
    }
}

#[test]
fn navigation_errors_propagate_unchanged() {
    let mut s = UrlState::builder(OfflineRouter)
        .defaults(search_defaults())
        .history(HistoryMode::Replace)
        .build()
        .unwrap();

    // Reads do not touch navigation.
    assert_eq!(s.get("count"), Some(StateValue::Number(4.0)));

    let err = s.set("count", 5).unwrap_err();
    assert!(err.downcast_ref::<RouterUnavailable>().is_some());
    assert!(s.reset().is_err());
}

#[test]
fn borrowed_router_can_back_a_synchronizer() {
    let mut router = MemoryRouter::new("/p").unwrap();
    {
        let mut s = UrlState::builder(&mut router)
            .defaults(search_defaults())
            .build()
            .unwrap();
        s.set("open", true).unwrap();
    }
    assert_eq!(router.current_href(), "/p?open=true");
}
