//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::NavLink;
use crate::domain::repositories::CatalogRepository;
use crate::domain::usecases::NoParams;
use anyhow::Error;
use std::sync::Arc;

pub struct GetNavLinks {
    repo: Arc<dyn CatalogRepository>,
}

impl GetNavLinks {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }
}

impl super::UseCase<Vec<NavLink>, NoParams> for GetNavLinks {
    fn call(&self, _params: NoParams) -> Result<Vec<NavLink>, Error> {
        Ok(self.repo.get_nav_links())
    }
}
