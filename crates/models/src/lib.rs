pub mod errors;
pub mod db;
pub mod service_category;
pub mod service;
pub mod service_details;
pub mod lead;

#[cfg(test)]
mod tests;
