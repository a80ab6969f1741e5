//! Client for the Liquidity card-issuing REST API: integrator registration,
//! virtual cards, deposits, float balances, transactions and KYC users.
//!
//! Every operation is a method on [`Client`] that performs one request and
//! decodes the `{ message, data }` envelope into a typed result.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod services;
pub mod transport;

pub use client::{Client, Credentials};
pub use error::{ApiError, Error, Result, TransportError, ValidationIssue};
pub use query::ListParams;
pub use transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};
