//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::ServiceOffering;
use crate::domain::repositories::CatalogRepository;
use crate::domain::usecases::NoParams;
use anyhow::Error;
use std::sync::Arc;

pub struct GetServices {
    repo: Arc<dyn CatalogRepository>,
}

impl GetServices {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }
}

impl super::UseCase<Vec<ServiceOffering>, NoParams> for GetServices {
    fn call(&self, _params: NoParams) -> Result<Vec<ServiceOffering>, Error> {
        Ok(self.repo.get_services())
    }
}
