//! Health Shop Library
//!
//! Routing, catalog and cart logic for a small demo shop selling insurance
//! plans, health check-ups and drinks.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod pages;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
