//! Integration tests for the public paginator API
//!
//! Tests the full flow: source → options → navigation → page slices

use paginator_tool::{
    from_fn, NavKey, PageInfo, PagePosition, Paginate, Paginator, PaginatorOptions,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
struct Product {
    id: u32,
}

fn products() -> Vec<Product> {
    (1..=20).map(|id| Product { id }).collect()
}

fn ids<'a>(page: impl Iterator<Item = &'a Product>) -> Vec<u32> {
    page.map(|p| p.id).collect()
}

// ============================================================================
// Product Catalogue Scenarios
// ============================================================================

#[test]
fn test_two_pages_of_ten() {
    let list = products();
    let paginator = Paginator::new(&list, 10).unwrap();

    let (current_page, page_count): (i64, usize) = paginator.page_state_info().into();
    assert_eq!(page_count, 2);
    assert_eq!(current_page, 1);
}

#[test]
fn test_set_page_fourth() {
    let list = products();
    let mut paginator = Paginator::new(&list, 5).unwrap();

    paginator.set_page(4);
    assert_eq!(paginator.page_state_info(), PageInfo::new(4, 4));
    assert_eq!(ids(paginator.current_state()), vec![16, 17, 18, 19, 20]);
}

#[test]
fn test_next_page_is_second() {
    let list = products();
    let mut paginator = Paginator::new(&list, 5).unwrap();

    paginator.set_next();
    assert_eq!(paginator.current_page(), 2);
}

#[test]
fn test_prev_page_stays_first() {
    let list = products();
    let mut paginator = Paginator::new(&list, 5).unwrap();

    paginator.set_prev();
    assert_eq!(paginator.current_page(), 1);
}

#[test]
fn test_first_item_of_second_page() {
    let list = products();
    let mut paginator = Paginator::new(&list, 5).unwrap();

    paginator.set_next();
    let first = paginator.current_state().next().unwrap();
    assert_eq!(first.id, 6);
}

#[test]
fn test_wrong_page_not_set() {
    let list = products();
    let mut paginator = Paginator::new(&list, 5).unwrap();

    paginator.set_page(10);
    assert_eq!(paginator.current_page(), 1);
}

#[test]
fn test_next_with_step_two() {
    let list = products();
    let mut paginator = Paginator::builder()
        .source(&list)
        .range(5)
        .step_change(2)
        .build()
        .unwrap();

    paginator.set_next();
    assert_eq!(paginator.current_page(), 3);
}

// ============================================================================
// Config-driven Construction
// ============================================================================

#[test]
fn test_paginator_from_yaml_options() {
    let yaml = r"
range: 4
step_change: 2
keys:
  prev: a
  next: d
";
    let options = PaginatorOptions::from_yaml_str(yaml).unwrap();
    let list = products();
    let mut paginator = Paginator::with_options(list.as_slice(), &options).unwrap();

    assert_eq!(paginator.page_count(), 5);
    assert!(paginator.change_page_by_key(NavKey::Char('d')));
    assert_eq!(ids(paginator.current_state()), vec![9, 10, 11, 12]);
    assert!(!paginator.change_page_by_key(NavKey::RightArrow));
    assert!(paginator.change_page_by_key(NavKey::Char('a')));
    assert_eq!(paginator.position(), PagePosition::First);
}

#[test]
fn test_paginator_from_json_options_rejects_zero() {
    let err = PaginatorOptions::from_json_str(r#"{"range": 0}"#).unwrap_err();
    assert!(err.is_invalid_argument());
}

// ============================================================================
// Key-driven Loop
// ============================================================================

#[test]
fn test_key_loop_visits_every_page_once() {
    let list = products();
    let mut paginator = Paginator::new(&list, 6).unwrap();

    let mut seen = vec![ids(paginator.current_state())];
    let presses = [
        NavKey::RightArrow,
        NavKey::Enter,
        NavKey::RightArrow,
        NavKey::RightArrow,
        NavKey::RightArrow,
    ];
    for key in presses {
        if paginator.change_page_by_key(key) {
            seen.push(ids(paginator.current_state()));
        }
    }

    assert_eq!(
        seen,
        vec![
            vec![1, 2, 3, 4, 5, 6],
            vec![7, 8, 9, 10, 11, 12],
            vec![13, 14, 15, 16, 17, 18],
            vec![19, 20],
        ]
    );
    assert_eq!(paginator.position(), PagePosition::Last);
}

// ============================================================================
// Live Sources
// ============================================================================

#[test]
fn test_live_source_growth_is_visible() {
    let live = RefCell::new(products());
    let mut paginator = Paginator::new(from_fn(|| live.borrow().clone()), 10).unwrap();

    paginator.set_next();
    assert!(!paginator.set_next());

    live.borrow_mut().push(Product { id: 21 });
    assert!(paginator.set_next());
    let page: Vec<u32> = paginator.current_state().map(|p| p.id).collect();
    assert_eq!(page, vec![21]);
}

#[test]
fn test_generic_caller_over_paginate() {
    fn last_page_len<P: Paginate>(paginator: &mut P) -> usize {
        while paginator.set_next() {}
        paginator.current_state().count()
    }

    let list = products();
    let mut paginator = Paginator::new(&list, 7).unwrap();
    assert_eq!(last_page_len(&mut paginator), 6);
    assert_eq!(paginator.page_state_info().to_string(), "page 3 of 3");
}
