//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::usecases::get_nav_links::GetNavLinks;
use crate::domain::usecases::{NoParams, UseCase};
use crate::preso::leptos::use_catalog;
use chrono::{Datelike, Local};
use leptos::prelude::*;

/// Year shown in the copyright notice, taken from the clock at render time.
pub fn copyright_year() -> i32 {
    Local::now().year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let links = GetNavLinks::new(use_catalog())
        .call(NoParams {})
        .unwrap_or_default();

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="brand">"FRESHFOLD"</h3>
                        <p>
                            "Premium laundry care delivered to your doorstep. Quality, reliability, and convenience are the fabrics of our business."
                        </p>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Navigation"</h4>
                        <ul class="footer-links">
                            {links
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a href=link.path()>{link.label}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Contact Us"</h4>
                        <p class="footer-contact">
                            "Accra, Dansoman"
                            <br />
                            "(233) 59-399-7536"
                            <br />
                            "support@freshfold.com"
                        </p>
                    </div>
                </div>
                <div class="footer-copyright">
                    "© " {copyright_year()} " FreshFold Laundry Services."
                </div>
            </div>
        </footer>
    }
}
