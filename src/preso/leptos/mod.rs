//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::data::repositories::CatalogRepositoryImpl;
use crate::domain::entities::FormStatus;
use crate::domain::repositories::CatalogRepository;
use crate::domain::usecases::UseCase;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use std::sync::Arc;

mod about;
mod contact;
mod footer;
mod home;
mod layout;
mod nav;
mod order;
mod services;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // The catalog is shared read-only by every page.
    let catalog: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::default());
    provide_context(catalog);

    view! {
        <Stylesheet id="leptos" href="/pkg/freshfold.css" />
        <Title text="FreshFold" />
        <Router>
            <layout::Layout>
                <Routes fallback=NotFound>
                    <Route path=path!("") view=home::HomePage />
                    <Route path=path!("/about") view=about::AboutPage />
                    <Route path=path!("/services") view=services::ServicesPage />
                    <Route path=path!("/order") view=order::OrderPage />
                    <Route path=path!("/contact") view=contact::ContactPage />
                    // unknown paths are rendered by the server too
                    <Route path=path!("/*any") view=NotFound />
                </Routes>
            </layout::Layout>
        </Router>
    }
}

/// Retrieve the catalog repository provided by the `App`.
fn use_catalog() -> Arc<dyn CatalogRepository> {
    use_context::<Arc<dyn CatalogRepository>>()
        .unwrap_or_else(|| Arc::new(CatalogRepositoryImpl::default()))
}

/// The part of a form page that is shown, never both at once.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FormPanel {
    Form,
    Confirmation,
}

impl From<FormStatus> for FormPanel {
    fn from(status: FormStatus) -> Self {
        if status.is_submitted() {
            FormPanel::Confirmation
        } else {
            FormPanel::Form
        }
    }
}

///
/// Run the use case that accepts the values of a form. On success the form
/// is marked as submitted, otherwise the error message is shown inline and
/// the form stays as it is.
///
fn submit_form<T, P, U: UseCase<T, P>>(
    usecase: &U,
    params: P,
    status: RwSignal<FormStatus>,
    error: RwSignal<Option<String>>,
) {
    match usecase.call(params) {
        Ok(_) => {
            error.set(None);
            status.update(|s| s.submit());
        }
        Err(err) => error.set(Some(err.to_string())),
    }
}

/// 404 - Not Found
#[component]
fn NotFound() -> impl IntoView {
    // set an HTTP status code 404 this is feature gated because it can only be
    // done during initial server-side rendering if you navigate to the 404 page
    // subsequently, the status code will not be set because there is not a new
    // HTTP request to the server
    #[cfg(feature = "ssr")]
    {
        // this can be done inline because it's synchronous if it were async,
        // we'd use a server function
        let resp = expect_context::<leptos_actix::ResponseOptions>();
        resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="FreshFold | Page Not Found" />
        <section class="section not-found">
            <div class="container narrow center">
                <div class="emoji">"🧦"</div>
                <h1 class="headline">"Page not found"</h1>
                <p class="muted">"This one must have gone missing in the wash."</p>
                <a href="/" class="button primary">
                    "BACK TO HOME"
                </a>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BookingRequest, ContactMessage};
    use crate::domain::usecases::book_pickup::BookPickup;
    use crate::domain::usecases::send_message::SendMessage;

    fn booking() -> BookingRequest {
        let mut booking = BookingRequest::new("wash-fold");
        booking.name = "Ama Boateng".into();
        booking.phone = "0591234567".into();
        booking.date = "2025-06-01".into();
        booking
    }

    #[test]
    fn test_booking_shows_confirmation_then_new_form() {
        // signals need a reactive owner (and arena) to live in
        let owner = Owner::new();
        owner.set();
        // arrange
        let status = RwSignal::new(FormStatus::default());
        let error = RwSignal::new(None::<String>);
        let usecase = BookPickup::new(use_catalog());
        assert_eq!(FormPanel::from(status.get_untracked()), FormPanel::Form);
        // act
        submit_form(&usecase, booking(), status, error);
        // assert
        assert_eq!(
            FormPanel::from(status.get_untracked()),
            FormPanel::Confirmation
        );
        assert_eq!(error.get_untracked(), None);
        // "New Order" brings back the form
        status.update(|s| s.reset());
        assert_eq!(FormPanel::from(status.get_untracked()), FormPanel::Form);
    }

    #[test]
    fn test_booking_rejected_keeps_form() {
        // signals need a reactive owner (and arena) to live in
        let owner = Owner::new();
        owner.set();
        // arrange
        let status = RwSignal::new(FormStatus::default());
        let error = RwSignal::new(None::<String>);
        let usecase = BookPickup::new(use_catalog());
        let mut params = booking();
        params.phone.clear();
        // act
        submit_form(&usecase, params, status, error);
        // assert
        assert_eq!(FormPanel::from(status.get_untracked()), FormPanel::Form);
        assert_eq!(
            error.get_untracked(),
            Some("please fill in the phone field".to_owned())
        );
    }

    #[test]
    fn test_contact_shows_sent_message() {
        // signals need a reactive owner (and arena) to live in
        let owner = Owner::new();
        owner.set();
        // arrange
        let status = RwSignal::new(FormStatus::default());
        let error = RwSignal::new(Some("stale".to_owned()));
        let usecase = SendMessage::new();
        let message = ContactMessage {
            name: "Kofi".into(),
            email: "kofi@example.com".into(),
            message: "When do you open?".into(),
        };
        // act
        submit_form(&usecase, message, status, error);
        // assert
        assert_eq!(
            FormPanel::from(status.get_untracked()),
            FormPanel::Confirmation
        );
        assert_eq!(error.get_untracked(), None);
    }
}
