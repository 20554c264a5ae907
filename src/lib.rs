//! Async client for the cardano-wallet REST API.
//!
//! Each method issues exactly one HTTP request and hands back the backend's
//! answer as an [`ApiResponse`]. Error statuses are not turned into errors;
//! only local argument checks and transport failures are.
//!
//! # Module Organization
//!
//! - [`client`] - Client factory, transport and per-namespace resources
//! - [`config`] - Connection settings
//! - [`domain`] - Errors, payment shaping, queries and request bodies
//! - [`mnemonic`] - Local mnemonic sentence generation

pub mod client;
pub mod config;
pub mod domain;
pub mod mnemonic;

#[cfg(test)]
mod test_utils;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{
    ApiRequest, ApiResponse, CardanoWallet, HttpTransport, RequestBody, Transport, WalletFamily,
};
pub use config::Config;
pub use domain::{
    ByronConstructTransaction, ConstructTransaction, Result, SortOrder, TransactionOptions,
    TransactionQuery, WalletError, format_payments, to_query,
};
pub use mnemonic::{Utils, mnemonic_sentence};
