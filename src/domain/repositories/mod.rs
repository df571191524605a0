//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{NavLink, ServiceOffering};
#[cfg(test)]
use mockall::automock;

///
/// Repository for the service catalog and the site navigation.
///
#[cfg_attr(test, automock)]
pub trait CatalogRepository: Send + Sync {
    /// Retrieve all of the service offerings, in display order.
    fn get_services(&self) -> Vec<ServiceOffering>;

    /// Retrieve the offering with the given identifier, if any.
    fn get_service(&self, id: &str) -> Option<ServiceOffering>;

    /// Retrieve the offering that forms select by default, which is the first
    /// in the catalog.
    fn default_service(&self) -> Option<ServiceOffering>;

    /// Retrieve the navigation links shown in the header and footer.
    fn get_nav_links(&self) -> Vec<NavLink>;
}
