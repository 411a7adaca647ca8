//! REST API client for the Bazaar backend.
//!
//! DESIGN
//! ======
//! One wrapper module per backend domain (`account`, `asset`, `wallet`,
//! `chat`, `market`, `auction`). Every wrapper builds a [`http::RequestDescriptor`]
//! and hands it to [`http::send`], which owns bearer-token injection, the
//! request timeout, response-envelope unwrapping, and the forced logout on
//! HTTP 401. Wrappers never validate or normalize identifiers; the backend
//! is the sole authority on inputs.

pub mod account;
pub mod asset;
pub mod auction;
pub mod chat;
pub mod http;
pub mod market;
pub mod types;
pub mod wallet;
