//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::Route;
use leptos::prelude::*;
use leptos_meta::Title;

static ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1521566652839-697aa473761a?auto=format&fit=crop&q=80&w=800";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=Route::About.title() />
        <section class="section">
            <div class="container two-columns">
                <div>
                    <h1 class="headline">
                        "Professionalism in " <span class="accent">"Every Thread."</span>
                    </h1>
                    <p class="lead">
                        "FreshFold began with a simple mission: to give people their time back. We treat every garment as an investment, using eco-friendly processes and state-of-the-art machinery."
                    </p>
                    <div class="stats">
                        <div>
                            <div class="stat-value">"10k+"</div>
                            <div class="stat-label">"Clients"</div>
                        </div>
                        <div>
                            <div class="stat-value">"250k+"</div>
                            <div class="stat-label">"Items"</div>
                        </div>
                    </div>
                </div>
                <div class="tilted-photo">
                    <img src=ABOUT_IMAGE alt="Folded laundry" />
                </div>
            </div>
        </section>
    }
}
