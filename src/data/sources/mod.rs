//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{NavLink, Route, ServiceOffering};
#[cfg(test)]
use mockall::automock;

static SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        id: "wash-fold",
        name: "Wash & Fold",
        description: "Perfect for everyday laundry. We wash, dry, and neatly fold your clothes.",
        price_label: "GH₵ 35.00 / kg",
        base_price: 35.0,
        icon: "🧺",
        image: "https://images.unsplash.com/photo-1545173168-9f1947eebb7f?auto=format&fit=crop&q=80&w=800",
    },
    ServiceOffering {
        id: "dry-cleaning",
        name: "Dry Cleaning",
        description: "Specialized care for delicate fabrics, suits, and formal wear.",
        price_label: "GH₵ 85.00 / item",
        base_price: 85.0,
        icon: "👔",
        image: "https://images.unsplash.com/photo-1517677208171-0bc6725a3e60?auto=format&fit=crop&q=80&w=800",
    },
    ServiceOffering {
        id: "ironing",
        name: "Ironing",
        description: "Professional pressing service to keep your garments crisp and wrinkle-free.",
        price_label: "GH₵ 45.00 / item",
        base_price: 45.0,
        icon: "💨",
        image: "https://images.unsplash.com/photo-1489274495757-95c7c837b101?auto=format&fit=crop&q=80&w=800",
    },
    ServiceOffering {
        id: "express",
        name: "Express Service",
        description: "Need it fast? Same-day turnaround for urgent laundry needs.",
        price_label: "+50% Surcharge",
        base_price: 1.5,
        icon: "⚡",
        image: "https://images.unsplash.com/photo-1626806819282-2c1dc01a5e0c?auto=format&fit=crop&q=80&w=800",
    },
];

// Display order of the navigation, which is not the order of the router table.
static NAVIGATION_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        route: Route::Home,
    },
    NavLink {
        label: "Services",
        route: Route::Services,
    },
    NavLink {
        label: "About",
        route: Route::About,
    },
    NavLink {
        label: "Order Now",
        route: Route::Order,
    },
    NavLink {
        label: "Contact",
        route: Route::Contact,
    },
];

///
/// Source of the read-only catalog data.
///
#[cfg_attr(test, automock)]
pub trait CatalogDataSource: Send + Sync {
    /// Return the service offerings in display order.
    fn services(&self) -> &'static [ServiceOffering];

    /// Return the navigation links in display order.
    fn nav_links(&self) -> &'static [NavLink];
}

/// Data source backed by the tables compiled into the application.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogDataSourceImpl;

impl CatalogDataSourceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogDataSource for CatalogDataSourceImpl {
    fn services(&self) -> &'static [ServiceOffering] {
        &SERVICES
    }

    fn nav_links(&self) -> &'static [NavLink] {
        &NAVIGATION_LINKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_service_ids_unique() {
        let source = CatalogDataSourceImpl::new();
        let services = source.services();
        assert_eq!(services.len(), 4);
        let ids: HashSet<&str> = services.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), services.len());
    }

    #[test]
    fn test_service_prices() {
        let source = CatalogDataSourceImpl::new();
        for service in source.services() {
            assert!(service.base_price > 0.0, "{}", service);
            assert!(!service.image.is_empty());
        }
        assert_eq!(source.services()[0].id, "wash-fold");
        assert_eq!(source.services()[3].base_price, 1.5);
    }

    #[test]
    fn test_nav_links_cover_routes() {
        let source = CatalogDataSourceImpl::new();
        let links = source.nav_links();
        let paths: HashSet<&str> = links.iter().map(|l| l.path()).collect();
        assert_eq!(paths.len(), links.len());
        for route in Route::ALL.iter() {
            assert!(paths.contains(route.path()), "missing {}", route);
        }
        let labels: Vec<&str> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "Services", "About", "Order Now", "Contact"]);
    }
}
