//! Typed clients for the two backends the console talks to: the general
//! API (companies, members, invitations) and the payments API (account,
//! expenses, income).
//!
//! The public surface is a pair of traits ([`CompanyApi`], [`PaymentsApi`]);
//! production code wires in the HTTP clients, tests and offline demos wire
//! in [`InMemoryBackend`].

pub mod api;
pub mod config;
pub mod error;
pub mod in_memory;
pub mod sample;
pub mod types;

mod companies;
mod http;
mod payments;

pub use api::{CompanyApi, PaymentsApi};
pub use companies::CompanyClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use in_memory::InMemoryBackend;
pub use payments::PaymentsClient;
pub use sample::sample_companies;
