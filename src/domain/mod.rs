//! Request shaping types shared by every namespace.
//!
//! # Module Organization
//!
//! - [`error`] - Error type and the literal argument-check messages
//! - [`payment`] - Argument guards and payment list normalization
//! - [`query`] - Query-string rendering and the typed transaction filter
//! - [`transaction`] - Transaction request bodies

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod payment;
pub mod query;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{
    EXPECTED_ARRAY, EXPECTED_CONFIG, EXPECTED_MAP, EXPECTED_SINGLE_ENTRY_MAPS, Result,
    WalletError,
};

pub use payment::{
    LOVELACE, format_payments, normalize_payments, verify_param_is_array, verify_param_is_map,
};

pub use query::{SortOrder, TransactionQuery, to_query};

pub use transaction::{ByronConstructTransaction, ConstructTransaction, Seconds, TransactionOptions};
