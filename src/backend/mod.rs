//! HTTP client for the contact endpoint

mod client;
mod traits;

pub use client::{ContactClient, CONTACT_PATH};
pub use traits::{ContactBackend, SendError};

#[cfg(test)]
pub use traits::MockContactBackend;
