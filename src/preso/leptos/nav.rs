//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::MenuState;
use crate::domain::usecases::get_nav_links::GetNavLinks;
use crate::domain::usecases::{NoParams, UseCase};
use crate::preso::leptos::use_catalog;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use leptos_use::on_click_outside;

static BURGER_ICON: &str = "M4 6h16M4 12h16M4 18h16";
static CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

/// Collapse the mobile menu, used both by its links and by outside clicks.
fn close_menu(menu: RwSignal<MenuState>) {
    menu.update(|m| m.close());
}

fn toggle_menu(menu: RwSignal<MenuState>) {
    menu.update(|m| m.toggle());
}

#[component]
pub fn NavBar() -> impl IntoView {
    let links = GetNavLinks::new(use_catalog())
        .call(NoParams {})
        .unwrap_or_default();
    let pathname = use_location().pathname;
    let menu = RwSignal::new(MenuState::default());
    let header_ref: NodeRef<Div> = NodeRef::new();
    let _ = on_click_outside(header_ref, move |_| close_menu(menu));
    let wide_links = links.clone();

    view! {
        <header class="site-header">
            <div node_ref=header_ref>
                <nav class="container navbar" role="navigation" aria-label="main navigation">
                    <a href="/" class="brand">
                        "FRESHFOLD"
                    </a>
                    <div class="navbar-links">
                        {wide_links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.path()
                                        class="navbar-item"
                                        class:is-active=move || link.is_active(&pathname.get())
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="navbar-burger"
                        aria-label="menu"
                        aria-expanded=move || menu.get().open.to_string()
                        on:click=move |_| toggle_menu(menu)
                    >
                        <svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                d=move || if menu.get().open { CLOSE_ICON } else { BURGER_ICON }
                                stroke-width="2"
                            />
                        </svg>
                    </button>
                </nav>
                <Show when=move || menu.get().open>
                    <div class="mobile-menu">
                        {links
                            .clone()
                            .into_iter()
                            .map(|link| {
                                // collapse the menu in the same click that navigates
                                view! {
                                    <a
                                        href=link.path()
                                        class="mobile-item"
                                        on:click=move |_| close_menu(menu)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </header>
    }
}
