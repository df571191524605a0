//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{BookingRequest, FormStatus, Route};
use crate::domain::repositories::CatalogRepository;
use crate::domain::usecases::book_pickup::BookPickup;
use crate::preso::leptos::{submit_form, use_catalog, FormPanel};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn OrderPage() -> impl IntoView {
    let status = RwSignal::new(FormStatus::default());

    view! {
        <Title text=Route::Order.title() />
        // the form and the confirmation are never shown together, and the
        // form is rebuilt with empty fields whenever it returns
        {move || match FormPanel::from(status.get()) {
            FormPanel::Confirmation => view! { <OrderReceived status /> }.into_any(),
            FormPanel::Form => view! { <BookingForm status /> }.into_any(),
        }}
    }
}

#[component]
fn OrderReceived(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        <section class="section center confirmation">
            <div class="emoji">"✅"</div>
            <h2 class="headline">"Order Received!"</h2>
            <p class="muted">"We'll call you in 15 minutes to confirm pickup."</p>
            <button class="button primary" on:click=move |_| status.update(|s| s.reset())>
                "New Order"
            </button>
        </section>
    }
}

#[component]
fn BookingForm(status: RwSignal<FormStatus>) -> impl IntoView {
    let catalog = use_catalog();
    let services = catalog.get_services();
    let default_id = catalog.default_service().map(|s| s.id).unwrap_or_default();
    let booking = RwSignal::new(BookingRequest::new(default_id));
    let error = RwSignal::new(None::<String>);
    let usecase = BookPickup::new(catalog);
    let on_submit = move |ev: SubmitEvent| {
        // stay on this page, nothing is sent to a server
        ev.prevent_default();
        submit_form(&usecase, booking.get_untracked(), status, error);
    };

    view! {
        <section class="section">
            <div class="container narrow">
                <div class="form-card">
                    <h1 class="headline">"Book Pickup"</h1>
                    <form class="form" on:submit=on_submit>
                        <input
                            required=true
                            type="text"
                            placeholder="Full Name"
                            prop:value=move || booking.with(|b| b.name.clone())
                            on:input=move |ev| booking.update(|b| b.name = event_target_value(&ev))
                        />
                        <input
                            required=true
                            type="tel"
                            placeholder="Phone Number"
                            prop:value=move || booking.with(|b| b.phone.clone())
                            on:input=move |ev| booking.update(|b| b.phone = event_target_value(&ev))
                        />
                        <select on:change=move |ev| {
                            booking.update(|b| b.service_id = event_target_value(&ev))
                        }>
                            {services
                                .iter()
                                .map(|service| {
                                    view! { <option value=service.id>{service.name}</option> }
                                })
                                .collect_view()}
                        </select>
                        <input
                            required=true
                            type="date"
                            prop:value=move || booking.with(|b| b.date.clone())
                            on:input=move |ev| booking.update(|b| b.date = event_target_value(&ev))
                        />
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        <button type="submit" class="button primary block">
                            "CONFIRM BOOKING"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
