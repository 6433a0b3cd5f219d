//! HTTP module for SES query API communication.
//!
//! - **Transport Layer**: the synchronous [`Transport`] seam, implemented by
//!   [`ReqwestTransport`] on top of reqwest's blocking client
//! - **HTTP Client**: [`SesHttpClient`] signs query requests and maps
//!   responses to results
//! - **Request/Response**: [`SesRequest`] and [`SesResponse`]
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  SesHttpClient  │  - Query encoding
//! │                 │  - Request signing
//! │                 │  - Status mapping
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Transport     │  - One blocking exchange per call
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ reqwest blocking│  - Actual HTTP implementation
//! └─────────────────┘
//! ```

mod client;
mod request;
mod response;
mod transport;

pub use client::SesHttpClient;
pub use request::SesRequest;
pub use response::SesResponse;
pub use transport::{ReqwestTransport, ReqwestTransportBuilder, Transport};

#[cfg(test)]
pub(crate) use transport::MockTransport;
