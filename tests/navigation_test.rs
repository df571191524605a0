//
// Copyright (c) 2025 Nathan Fiedler
//
use freshfold::data::repositories::CatalogRepositoryImpl;
use freshfold::domain::entities::{is_same_page, scroll_due, NavLink, Route};
use freshfold::domain::usecases::get_nav_links::GetNavLinks;
use freshfold::domain::usecases::{NoParams, UseCase};
use std::sync::Arc;

fn nav_links() -> Vec<NavLink> {
    GetNavLinks::new(Arc::new(CatalogRepositoryImpl::default()))
        .call(NoParams {})
        .unwrap()
}

fn active_labels(path: &str) -> Vec<&'static str> {
    nav_links()
        .into_iter()
        .filter(|link| link.is_active(path))
        .map(|link| link.label)
        .collect()
}

#[test]
fn test_every_link_has_a_route() {
    for link in nav_links() {
        assert_eq!(Route::from_path(link.path()), Some(link.route));
    }
}

#[test]
fn test_active_link_matches_destination() {
    assert_eq!(active_labels("/"), vec!["Home"]);
    assert_eq!(active_labels("/services"), vec!["Services"]);
    assert_eq!(active_labels("/order"), vec!["Order Now"]);
    assert!(active_labels("/nowhere").is_empty());
}

#[test]
fn test_scroll_once_per_navigation() {
    // each link followed, with the path shown before it
    let clicks = ["/services", "/services", "/about", "/", "/"];
    let mut previous: Option<&str> = None;
    let mut scrolls = 0;
    if scroll_due(previous, "/") {
        scrolls += 1;
    }
    previous = Some("/");
    for href in clicks {
        let current = previous.unwrap_or_default();
        // either the link click or the change of path scrolls, never both
        if is_same_page(href, current) {
            scrolls += 1;
        }
        if scroll_due(previous, href) {
            scrolls += 1;
        }
        previous = Some(href);
    }
    assert_eq!(scrolls, 6);
}
