//
// Copyright (c) 2025 Nathan Fiedler
//
use freshfold::data::repositories::CatalogRepositoryImpl;
use freshfold::domain::entities::{BookingRequest, ContactMessage, FormError};
use freshfold::domain::repositories::CatalogRepository;
use freshfold::domain::usecases::book_pickup::BookPickup;
use freshfold::domain::usecases::send_message::SendMessage;
use freshfold::domain::usecases::UseCase;
use std::sync::Arc;

fn book_pickup() -> BookPickup {
    let repo: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::default());
    BookPickup::new(repo)
}

fn fresh_booking() -> BookingRequest {
    let repo = CatalogRepositoryImpl::default();
    let default_id = repo.default_service().map(|s| s.id).unwrap_or_default();
    BookingRequest::new(default_id)
}

#[test]
fn test_fresh_booking_is_empty() {
    let booking = fresh_booking();
    assert_eq!(booking.service_id, "wash-fold");
    assert!(booking.name.is_empty());
    assert!(booking.phone.is_empty());
    assert!(booking.date.is_empty());
}

#[test]
fn test_booking_accepted() {
    let mut booking = fresh_booking();
    booking.name = "Ama Boateng".into();
    booking.phone = "0591234567".into();
    booking.service_id = "ironing".into();
    booking.date = "2025-06-01".into();
    let result = book_pickup().call(booking.clone());
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), booking);
}

#[test]
fn test_booking_missing_phone_rejected() {
    let mut booking = fresh_booking();
    booking.name = "Ama Boateng".into();
    booking.date = "2025-06-01".into();
    let result = book_pickup().call(booking);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().downcast_ref::<FormError>(),
        Some(&FormError::MissingField("phone"))
    );
}

#[test]
fn test_contact_message_accepted() {
    let message = ContactMessage {
        name: "Kofi".into(),
        email: "kofi@example.com".into(),
        message: "When do you open?".into(),
    };
    let result = SendMessage::new().call(message.clone());
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), message);
}

#[test]
fn test_contact_invalid_email_rejected() {
    let message = ContactMessage {
        name: "Kofi".into(),
        email: "kofi@".into(),
        message: "When do you open?".into(),
    };
    let result = SendMessage::new().call(message);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().downcast_ref::<FormError>(),
        Some(&FormError::InvalidEmail("kofi@".into()))
    );
}
