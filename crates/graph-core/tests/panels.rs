// File: crates/graph-core/tests/panels.rs
// Purpose: Tab group exclusivity and accordion open/close behavior.

use graph_core::{Accordion, TabGroup};

#[test]
fn activating_a_tab_deactivates_the_rest() {
    let mut tabs = TabGroup::new(["taxi", "study", "spring", "cooling"]);
    assert_eq!(tabs.active(), None);

    assert!(tabs.activate("study"));
    assert!(tabs.is_active("study"));
    assert!(tabs.activate("cooling"));
    let active: Vec<_> = tabs.panels().iter().filter(|p| tabs.is_active(p)).collect();
    assert_eq!(active, vec!["cooling"]);
}

#[test]
fn unknown_tab_is_ignored() {
    let mut tabs = TabGroup::with_first_active(["a", "b"]);
    assert!(!tabs.activate("zzz"));
    assert_eq!(tabs.active(), Some("a"));
}

#[test]
fn cycling_wraps_both_ways() {
    let mut tabs = TabGroup::with_first_active(["a", "b", "c"]);
    assert_eq!(tabs.cycle(1), Some("b"));
    assert_eq!(tabs.cycle(2), Some("a"));
    assert_eq!(tabs.cycle(-1), Some("c"));
    assert_eq!(TabGroup::new(Vec::<String>::new()).cycle(1), None);
}

#[test]
fn accordion_keeps_at_most_one_item_open() {
    let mut acc = Accordion::new(["faq1", "faq2", "faq3"], Some("faq1"));
    assert!(acc.is_open("faq1"));

    assert!(acc.toggle("faq3"));
    assert_eq!(acc.open_item(), Some("faq3"));
    assert!(!acc.is_open("faq1"));

    // toggling the open item collapses it
    assert!(!acc.toggle("faq3"));
    assert_eq!(acc.open_item(), None);
}

#[test]
fn accordion_ignores_unknown_items() {
    let mut acc = Accordion::new(["a", "b"], None);
    assert!(!acc.toggle("c"));
    assert_eq!(acc.open_item(), None);
    assert_eq!(Accordion::new(["a"], Some("missing")).open_item(), None);
}
