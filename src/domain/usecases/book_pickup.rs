//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{BookingRequest, FormError};
use crate::domain::repositories::CatalogRepository;
use anyhow::Error;
use log::{debug, warn};
use std::sync::Arc;

///
/// Accept a pickup booking. The name, phone, and date are required, though
/// any non-empty value will do; a service that is missing from the catalog is
/// replaced by the default service.
/// Nothing leaves the browser, the caller merely flips the form status.
///
pub struct BookPickup {
    repo: Arc<dyn CatalogRepository>,
}

impl BookPickup {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }
}

impl super::UseCase<BookingRequest, BookingRequest> for BookPickup {
    fn call(&self, params: BookingRequest) -> Result<BookingRequest, Error> {
        let required = [
            ("name", &params.name),
            ("phone", &params.phone),
            ("date", &params.date),
        ];
        for (field, value) in required {
            if value.is_empty() {
                warn!("booking rejected, missing {}", field);
                return Err(FormError::MissingField(field).into());
            }
        }
        let mut booking = params;
        if self.repo.get_service(&booking.service_id).is_none() {
            if let Some(service) = self.repo.default_service() {
                booking.service_id = service.id.to_owned();
            }
        }
        debug!("accepted {}", booking);
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::super::UseCase;
    use super::*;
    use crate::domain::entities::ServiceOffering;
    use crate::domain::repositories::MockCatalogRepository;

    fn wash_fold() -> ServiceOffering {
        ServiceOffering {
            id: "wash-fold",
            name: "Wash & Fold",
            description: "Folded.",
            price_label: "GH₵ 35.00 / kg",
            base_price: 35.0,
            icon: "🧺",
            image: "",
        }
    }

    fn booking() -> BookingRequest {
        BookingRequest {
            name: "Ama Boateng".into(),
            phone: "0591234567".into(),
            service_id: "wash-fold".into(),
            date: "2025-06-01".into(),
        }
    }

    #[test]
    fn test_book_pickup_ok() {
        // arrange
        let mut mock = MockCatalogRepository::new();
        mock.expect_get_service().returning(|_| Some(wash_fold()));
        // act
        let usecase = BookPickup::new(Arc::new(mock));
        let result = usecase.call(booking());
        // assert
        assert!(result.is_ok());
        let actual = result.unwrap();
        assert_eq!(actual, booking());
    }

    fn assert_missing(params: BookingRequest, field: &'static str) {
        // arrange
        let mut mock = MockCatalogRepository::new();
        mock.expect_get_service().returning(|_| Some(wash_fold()));
        // act
        let usecase = BookPickup::new(Arc::new(mock));
        let result = usecase.call(params);
        // assert
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<FormError>(),
            Some(&FormError::MissingField(field))
        );
    }

    #[test]
    fn test_book_pickup_missing_fields() {
        let mut params = booking();
        params.name.clear();
        assert_missing(params, "name");
        let mut params = booking();
        params.phone.clear();
        assert_missing(params, "phone");
        let mut params = booking();
        params.date.clear();
        assert_missing(params, "date");
        assert_missing(BookingRequest::new("wash-fold"), "name");
    }

    #[test]
    fn test_book_pickup_whitespace_is_a_value() {
        // arrange
        let mut mock = MockCatalogRepository::new();
        mock.expect_get_service().returning(|_| Some(wash_fold()));
        let mut params = booking();
        params.name = "  ".into();
        // act
        let usecase = BookPickup::new(Arc::new(mock));
        let result = usecase.call(params);
        // assert
        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "  ");
    }

    #[test]
    fn test_book_pickup_unknown_service() {
        // arrange
        let mut mock = MockCatalogRepository::new();
        mock.expect_get_service().returning(|_| None);
        mock.expect_default_service()
            .returning(|| Some(wash_fold()));
        let mut params = booking();
        params.service_id = "curtains".into();
        // act
        let usecase = BookPickup::new(Arc::new(mock));
        let result = usecase.call(params);
        // assert
        assert!(result.is_ok());
        assert_eq!(result.unwrap().service_id, "wash-fold");
    }
}
