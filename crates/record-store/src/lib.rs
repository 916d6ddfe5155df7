//! # Salescope Record Store
//!
//! This crate owns the base table of orders: it reads the order report export,
//! rejects rows that violate the record schema, and then holds the table
//! immutably for the lifetime of the process.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Adapter:** All file-format knowledge (column names, date layouts,
//!   boolean spellings) lives here. Downstream crates only see typed `OrderRecord`s.
//! - **Fail at Load Time:** A missing `order_id`, an unparsable `order_date`, a
//!   negative amount or a duplicated id stops the load with a `StoreError` that
//!   names the offending line. Nothing downstream has to repair records.
//! - **Read-Only After Load:** `RecordStore` exposes shared borrows only, so it can
//!   be shared across threads behind an `Arc` without locking.
//!
//! ## Public API
//!
//! - `load_orders` / `load_orders_from_reader`: Parse an export into records.
//! - `RecordStore`: The immutable base table plus its non-cancelled view.
//! - `FilterOptions`: The category list and date bounds a caller can filter by.
//! - `StoreError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod loader;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StoreError;
pub use loader::{load_orders, load_orders_from_reader, UNKNOWN_LABEL};
pub use store::{FilterOptions, RecordStore};
