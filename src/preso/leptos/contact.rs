//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{ContactMessage, FormStatus, Route};
use crate::domain::usecases::send_message::SendMessage;
use crate::preso::leptos::{submit_form, FormPanel};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;

static BANNER_IMAGE: &str =
    "https://images.unsplash.com/photo-1517677208171-0bc6725a3e60?auto=format&fit=crop&q=80&w=1920";

#[component]
pub fn ContactPage() -> impl IntoView {
    // no way back to the form short of leaving the page
    let status = RwSignal::new(FormStatus::default());

    view! {
        <Title text=Route::Contact.title() />
        <div class="contact-page">
            <div class="banner">
                <img class="banner-image" src=BANNER_IMAGE alt="" />
                <div class="banner-overlay">
                    <h1 class="banner-title">"GET IN TOUCH"</h1>
                </div>
            </div>
            <div class="container contact-grid">
                <div class="contact-cards">
                    <div class="info-card">
                        <h3>"Main Office"</h3>
                        <p class="muted">"Accra, Dansoman, Adole Abla ST"</p>
                    </div>
                    <div class="info-card">
                        <h3>"Phone"</h3>
                        <p class="muted">"(233) 59-399-7536"</p>
                    </div>
                    <div class="info-card highlight">
                        <h3>"Area Coverage"</h3>
                        <p>"We service Accra, East Legon, Cantonments, and Dansoman."</p>
                    </div>
                </div>
                <div class="form-card">
                    {move || match FormPanel::from(status.get()) {
                        FormPanel::Confirmation => {
                            view! {
                                <div class="sent-message">
                                    "Message sent successfully! We'll reply shortly."
                                </div>
                            }
                                .into_any()
                        }
                        FormPanel::Form => view! { <ContactForm status /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactForm(status: RwSignal<FormStatus>) -> impl IntoView {
    let message = RwSignal::new(ContactMessage::default());
    let error = RwSignal::new(None::<String>);
    let usecase = SendMessage::new();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_form(&usecase, message.get_untracked(), status, error);
    };

    view! {
        <form class="form" on:submit=on_submit>
            <div class="form-row">
                <input
                    required=true
                    placeholder="Name"
                    prop:value=move || message.with(|m| m.name.clone())
                    on:input=move |ev| message.update(|m| m.name = event_target_value(&ev))
                />
                <input
                    required=true
                    type="email"
                    placeholder="Email"
                    prop:value=move || message.with(|m| m.email.clone())
                    on:input=move |ev| message.update(|m| m.email = event_target_value(&ev))
                />
            </div>
            <textarea
                required=true
                placeholder="How can we help?"
                rows="5"
                prop:value=move || message.with(|m| m.message.clone())
                on:input=move |ev| message.update(|m| m.message = event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="button primary block">
                "SEND MESSAGE"
            </button>
        </form>
    }
}
