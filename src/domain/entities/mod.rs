//
// Copyright (c) 2025 Nathan Fiedler
//
use anyhow::{anyhow, Error};
use std::fmt;
use std::str::FromStr;

/// Currency label that prefixes every displayed price.
pub static CURRENCY: &str = "GH₵";

///
/// A laundry service offered by the business. The catalog of offerings is
/// fixed at build time and never changes while the application runs.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceOffering {
    /// Unique key for this offering (e.g. "wash-fold").
    pub id: &'static str,
    /// Display name of the service.
    pub name: &'static str,
    /// Short promotional description.
    pub description: &'static str,
    /// Human readable price, never parsed.
    pub price_label: &'static str,
    /// Price per unit used by the price estimator.
    ///
    /// For the "express" offering this is a surcharge multiplier rather than
    /// a unit price, yet the estimator treats it the same as the others.
    pub base_price: f64,
    /// Glyph shown on the service cards.
    pub icon: &'static str,
    /// URL of the promotional image.
    pub image: &'static str,
}

impl fmt::Display for ServiceOffering {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "service-{}", self.id)
    }
}

/// Route identifies one of the pages of the site.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Order,
    Contact,
}

impl Route {
    /// Every route recognized by the router.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Order,
        Route::Contact,
    ];

    /// Return the URL path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Order => "/order",
            Route::Contact => "/contact",
        }
    }

    /// Return the document title for the page at this route.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "FreshFold | Premium Laundry Care",
            Route::About => "FreshFold | About Us",
            Route::Services => "FreshFold | Services & Pricing",
            Route::Order => "FreshFold | Book Pickup",
            Route::Contact => "FreshFold | Contact",
        }
    }

    /// Find the route whose path exactly matches the one given.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| anyhow!(format!("not a recognized route: {}", s)))
    }
}

/// A labeled link shown in the header and footer navigation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavLink {
    /// Text of the link.
    pub label: &'static str,
    /// Page to which the link leads.
    pub route: Route,
}

impl NavLink {
    pub fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }

    /// Return the URL path of the link target.
    pub fn path(&self) -> &'static str {
        self.route.path()
    }

    /// Return `true` if this link points at exactly the given path.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path() == current_path
    }
}

///
/// Inputs of the price estimator: the selected service and the quantity
/// (kilograms or items) entered by the visitor.
///
#[derive(Clone, Debug, PartialEq)]
pub struct EstimatorState {
    /// Identifier of the selected service, may not match any offering.
    pub selected: String,
    /// Quantity entered by the visitor, zero when empty or unparseable.
    pub quantity: f64,
}

impl EstimatorState {
    /// Construct an estimator with the given service selected and no quantity.
    pub fn new(selected: &str) -> Self {
        Self {
            selected: selected.to_owned(),
            quantity: 0.0,
        }
    }

    /// Change the selected service, leaving the quantity alone.
    pub fn select(&mut self, service_id: &str) {
        self.selected = service_id.to_owned();
    }

    /// Set the quantity from raw input text.
    pub fn enter_quantity(&mut self, raw: &str) {
        self.quantity = parse_quantity(raw);
    }
}

///
/// Parse the quantity text entered into the estimator. Anything that is not a
/// finite decimal number counts as zero. Negative values are accepted.
///
pub fn parse_quantity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Estimated price for a quantity of a particular service.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub amount: f64,
}

impl Estimate {
    pub fn new(amount: f64) -> Self {
        // avoid displaying "-0.00" for a zero estimate
        let amount = if amount == 0.0 { 0.0 } else { amount };
        Self { amount }
    }

    ///
    /// Return the amount formatted with exactly two decimal places. An amount
    /// lying exactly halfway between two cents is rounded away from zero,
    /// otherwise the nearest cent is used.
    ///
    pub fn formatted_amount(&self) -> String {
        // exact half cents are the odd multiples of 1/8
        let eighths = self.amount * 8.0;
        if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
            format!("{:.2}", (self.amount * 100.0).round() / 100.0)
        } else {
            format!("{:.2}", self.amount)
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", CURRENCY, self.formatted_amount())
    }
}

/// Status of a form that is submitted locally without contacting a server.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

impl FormStatus {
    /// Record that the form was submitted.
    pub fn submit(&mut self) {
        *self = FormStatus::Submitted;
    }

    /// Return to editing a fresh form.
    pub fn reset(&mut self) {
        *self = FormStatus::Editing;
    }

    /// Return `true` if the form has been submitted.
    pub fn is_submitted(&self) -> bool {
        matches!(*self, FormStatus::Submitted)
    }
}

/// Whether the collapsible navigation menu on narrow screens is expanded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

///
/// Decide if the viewport should be scrolled to the top given the path of the
/// previously committed route (if any) and the path just committed.
///
pub fn scroll_due(previous: Option<&str>, current: &str) -> bool {
    previous != Some(current)
}

///
/// Return `true` if following a link to `href` lands on the page at `current`
/// again. The path does not change, yet it is still a navigation.
///
pub fn is_same_page(href: &str, current: &str) -> bool {
    href == current && Route::from_path(href).is_some()
}

/// Details of a pickup booking entered on the order page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BookingRequest {
    /// Full name of the customer.
    pub name: String,
    /// Phone number at which to confirm the pickup.
    pub phone: String,
    /// Identifier of the requested service.
    pub service_id: String,
    /// Requested pickup date, as entered (e.g. 2025-06-01).
    pub date: String,
}

impl BookingRequest {
    /// Construct an empty booking for the given default service.
    pub fn new(service_id: &str) -> Self {
        Self {
            service_id: service_id.to_owned(),
            ..Default::default()
        }
    }
}

impl fmt::Display for BookingRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "booking-{}-{}", self.service_id, self.date)
    }
}

/// A message entered on the contact page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

///
/// Raised when a form is submitted with missing or malformed values.
///
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum FormError {
    #[error("please fill in the {0} field")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}
