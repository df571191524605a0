//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{ContactMessage, FormError};
use anyhow::Error;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

lazy_static! {
    // The "valid e-mail address" production from the HTML living standard,
    // which is what browsers enforce for <input type="email">.
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .unwrap();
}

/// Return `true` if the text is a syntactically valid email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

///
/// Accept a message from the contact page. All fields are required and the
/// email address must be well formed. Like the browser, surrounding
/// whitespace is stripped from the email address only. The message is not
/// sent anywhere.
///
pub struct SendMessage {}

impl SendMessage {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for SendMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl super::UseCase<ContactMessage, ContactMessage> for SendMessage {
    fn call(&self, params: ContactMessage) -> Result<ContactMessage, Error> {
        let email = params.email.trim();
        let required = [
            ("name", params.name.as_str()),
            ("email", email),
            ("message", params.message.as_str()),
        ];
        for (field, value) in required {
            if value.is_empty() {
                warn!("message rejected, missing {}", field);
                return Err(FormError::MissingField(field).into());
            }
        }
        if !is_valid_email(email) {
            warn!("message rejected, malformed email");
            return Err(FormError::InvalidEmail(email.to_owned()).into());
        }
        debug!("accepted message of {} characters", params.message.len());
        Ok(ContactMessage {
            email: email.to_owned(),
            ..params
        })
    }
}
