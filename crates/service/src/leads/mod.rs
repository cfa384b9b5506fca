//! Lead capture for the contact form.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::LeadService;
