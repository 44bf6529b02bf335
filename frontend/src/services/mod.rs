//! Backend and browser services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`api`] - Analysis and feedback calls to the LexiCare backend
//! - [`notify`] - Blocking alert dialogs

pub mod api;
pub mod notify;

pub use api::*;
pub use notify::*;
