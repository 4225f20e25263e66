//! Search Gateway Adapters.
//!
//! Implementations of the SearchGateway port.
//!
//! - `HttpSearchGateway` - the real backend over HTTP (reqwest)
//! - `MockSearchGateway` - scripted outcomes for testing

mod http;
mod mock;

pub use http::{HttpSearchConfig, HttpSearchGateway};
pub use mock::{MockSearchGateway, MockSearchOutcome};
