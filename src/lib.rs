//! Contact TUI - Terminal "Contact Us" page
//!
//! A Ratatui-based page with static contact details and a validated form
//! that posts messages to the backend's contact endpoint.

pub mod app;
pub mod backend;
pub mod config;
pub mod platform;
pub mod state;
pub mod submission;
pub mod ui;
