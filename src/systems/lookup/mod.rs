//! Remote lookup of a search term.
//!
//! The UI thread never blocks on the network: requests are handed to the
//! worker spawned by [`spawn`] and settle asynchronously as [`LookupResponse`]s.

mod client;
mod commands;
mod error;
mod record;
mod worker;

pub use client::{HttpLookupClient, LookupClient, parse_endpoint};
pub(crate) use commands::{LookupCommand, LookupResponse};
pub use error::LookupError;
pub use record::LookupRecord;
pub(crate) use worker::spawn;
