//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{Estimate, EstimatorState};
use crate::domain::repositories::CatalogRepository;
use anyhow::Error;
use log::debug;
use std::fmt;
use std::sync::Arc;

///
/// Multiply the base price of the selected service by the quantity. An unknown
/// service is priced at zero rather than treated as an error, since the form
/// may briefly hold a selection that does not match the catalog.
///
pub struct EstimatePrice {
    repo: Arc<dyn CatalogRepository>,
}

impl EstimatePrice {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }
}

impl super::UseCase<Estimate, Params> for EstimatePrice {
    fn call(&self, params: Params) -> Result<Estimate, Error> {
        let base_price = match self.repo.get_service(&params.service_id) {
            Some(service) => service.base_price,
            None => {
                debug!("no such service {}, pricing at zero", params.service_id);
                0.0
            }
        };
        Ok(Estimate::new(base_price * params.quantity))
    }
}

#[derive(Clone, Debug)]
pub struct Params {
    /// Identifier of the service to be priced.
    service_id: String,
    /// Weight in kilograms or number of items.
    quantity: f64,
}

impl Params {
    pub fn new(service_id: String, quantity: f64) -> Self {
        Self {
            service_id,
            quantity,
        }
    }
}

impl From<&EstimatorState> for Params {
    fn from(state: &EstimatorState) -> Self {
        Self::new(state.selected.clone(), state.quantity)
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params({} x {})", self.service_id, self.quantity)
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.service_id == other.service_id && self.quantity == other.quantity
    }
}
