//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `lead_form`: The lead-capture form

mod field_renderer;
mod lead_form;

pub use lead_form::draw_lead_form;
