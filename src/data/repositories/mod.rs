//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::data::sources::{CatalogDataSource, CatalogDataSourceImpl};
use crate::domain::entities::{NavLink, ServiceOffering};
use crate::domain::repositories::CatalogRepository;
use std::sync::Arc;

pub struct CatalogRepositoryImpl {
    datasource: Arc<dyn CatalogDataSource>,
}

impl CatalogRepositoryImpl {
    pub fn new(datasource: Arc<dyn CatalogDataSource>) -> Self {
        Self { datasource }
    }
}

impl Default for CatalogRepositoryImpl {
    fn default() -> Self {
        Self::new(Arc::new(CatalogDataSourceImpl::new()))
    }
}

impl CatalogRepository for CatalogRepositoryImpl {
    fn get_services(&self) -> Vec<ServiceOffering> {
        self.datasource.services().to_vec()
    }

    fn get_service(&self, id: &str) -> Option<ServiceOffering> {
        self.datasource
            .services()
            .iter()
            .find(|s| s.id == id)
            .copied()
    }

    fn default_service(&self) -> Option<ServiceOffering> {
        self.datasource.services().first().copied()
    }

    fn get_nav_links(&self) -> Vec<NavLink> {
        self.datasource.nav_links().to_vec()
    }
}
