//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{EstimatorState, Route, ServiceOffering};
use crate::domain::repositories::CatalogRepository;
use crate::domain::usecases::estimate_price::{EstimatePrice, Params};
use crate::domain::usecases::get_services::GetServices;
use crate::domain::usecases::{NoParams, UseCase};
use crate::preso::leptos::use_catalog;
use leptos::prelude::*;
use leptos_meta::Title;
use std::sync::Arc;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let catalog = use_catalog();
    let services = GetServices::new(catalog.clone())
        .call(NoParams {})
        .unwrap_or_default();

    view! {
        <Title text=Route::Services.title() />
        <section class="section">
            <div class="container">
                <h1 class="headline center">"Care Options"</h1>
                <div class="service-rows">
                    {services
                        .iter()
                        .map(|service| view! { <ServiceRow service=*service /> })
                        .collect_view()}
                </div>
                <PriceEstimator services catalog />
            </div>
        </section>
    }
}

#[component]
fn ServiceRow(service: ServiceOffering) -> impl IntoView {
    view! {
        <div class="service-row">
            <img class="service-image" src=service.image alt=service.name />
            <div class="service-body">
                <h3 class="card-title">{service.name}</h3>
                <p class="card-text">{service.description}</p>
                <span class="tag">{service.price_label}</span>
            </div>
        </div>
    }
}

/// Multiplies the base price of the chosen service by the entered quantity.
#[component]
fn PriceEstimator(
    services: Vec<ServiceOffering>,
    catalog: Arc<dyn CatalogRepository>,
) -> impl IntoView {
    let initial = services.first().map(|s| s.id).unwrap_or_default();
    let estimator = RwSignal::new(EstimatorState::new(initial));
    let usecase = EstimatePrice::new(catalog);
    let price = move || {
        estimator.with(|state| match usecase.call(Params::from(state)) {
            Ok(estimate) => estimate.to_string(),
            Err(err) => {
                log::error!("estimate failed: {}", err);
                String::new()
            }
        })
    };

    view! {
        <div class="estimator">
            <h2 class="estimator-title">"Price Estimator"</h2>
            <div class="estimator-inputs">
                <select
                    class="dark-input"
                    on:change=move |ev| {
                        estimator.update(|state| state.select(&event_target_value(&ev)))
                    }
                >
                    {services
                        .iter()
                        .map(|service| view! { <option value=service.id>{service.name}</option> })
                        .collect_view()}
                </select>
                <input
                    class="dark-input"
                    type="number"
                    step="any"
                    placeholder="Weight/Items"
                    on:input=move |ev| {
                        estimator.update(|state| state.enter_quantity(&event_target_value(&ev)))
                    }
                />
            </div>
            <div class="estimate">{price}</div>
        </div>
    }
}
