//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `contact_form`: Contact form and contact info panel

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact;
