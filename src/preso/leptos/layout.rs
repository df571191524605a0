//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{is_same_page, scroll_due, Route};
use crate::preso::leptos::{footer, nav};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use log::{debug, warn};
use wasm_bindgen::JsCast;

fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

/// Return the target of the link that was clicked, if any.
fn clicked_href(ev: &MouseEvent) -> Option<String> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    element.closest("a").ok()??.get_attribute("href")
}

/// Wraps every page between the header and the footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;
    // Runs once for the initial render and again after each change of path.
    Effect::new(move |previous: Option<String>| {
        let path = pathname.get();
        if scroll_due(previous.as_deref(), &path) {
            match Route::from_path(&path) {
                Some(route) => debug!("navigated to {:?}", route),
                None => warn!("no route for {}", path),
            }
            scroll_to_top();
        }
        path
    });
    // The location does not change when a link to the current page is
    // followed, so the effect above never sees those navigations.
    let on_click = move |ev: MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        if let Some(href) = clicked_href(&ev) {
            if is_same_page(&href, &pathname.get_untracked()) {
                debug!("navigated to {} again", href);
                scroll_to_top();
            }
        }
    };

    view! {
        <div class="page" on:click=on_click>
            <nav::NavBar />
            <main class="page-main">{children()}</main>
            <footer::Footer />
        </div>
    }
}
