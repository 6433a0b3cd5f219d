//! Types for the `SendEmail` action.
//!
//! Outgoing messages and their query encoding live in `email`; the XML shape
//! of a successful response lives in `responses`.

mod email;
mod responses;

pub use email::*;
pub use responses::*;
