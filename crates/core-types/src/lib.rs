pub mod dates;
pub mod enums;
pub mod error;
pub mod filter;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use dates::{parse_date_bound, parse_order_date};
pub use enums::{CategoryFilter, Dimension};
pub use error::CoreError;
pub use filter::FilterParams;
pub use structs::{exclude_cancelled, OrderRecord, CANCELLED_STATUS};
