//! ODuo Leads - terminal lead-capture form
//!
//! A Ratatui-based front end for the ODuo landing-page forms: collects
//! contact data, validates it and hands it to the CRM.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod submission;
pub mod ui;
