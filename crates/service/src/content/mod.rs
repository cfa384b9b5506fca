//! Catalog reads: services, categories, service details and navigation menus.
//!
//! Same three layers as the rest of the crate (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CatalogService;
