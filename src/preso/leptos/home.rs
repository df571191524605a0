//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::Route;
use crate::domain::usecases::get_services::GetServices;
use crate::domain::usecases::{NoParams, UseCase};
use crate::preso::leptos::use_catalog;
use leptos::prelude::*;
use leptos_meta::Title;

static HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1545173168-9f1947eebb7f?auto=format&fit=crop&q=80&w=1920";

#[component]
pub fn HomePage() -> impl IntoView {
    let services = GetServices::new(use_catalog())
        .call(NoParams {})
        .unwrap_or_default();

    view! {
        <Title text=Route::Home.title() />
        <section class="hero">
            <img class="hero-image" src=HERO_IMAGE alt="" />
            <div class="hero-overlay"></div>
            <div class="container hero-body">
                <h1 class="hero-title">
                    "CLEAN CLOTHES," <br /> <span class="accent">"FRESH LIFE."</span>
                </h1>
                <p class="hero-subtitle">
                    "Premium door-to-door laundry services. We handle the dirty work so you don't have to."
                </p>
                <div class="hero-actions">
                    <a href=Route::Order.path() class="button primary large">
                        "BOOK PICKUP"
                    </a>
                    <a href=Route::Services.path() class="button glass large">
                        "OUR SERVICES"
                    </a>
                </div>
            </div>
        </section>
        <section class="section white">
            <div class="container card-grid">
                {services
                    .into_iter()
                    .map(|service| {
                        view! {
                            <div class="card">
                                <div class="card-icon">{service.icon}</div>
                                <h3 class="card-title">{service.name}</h3>
                                <p class="card-text">{service.description}</p>
                                <div class="card-price">{service.price_label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
