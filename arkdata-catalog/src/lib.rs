//! Public output schema and its on-disk store.
//!
//! This crate defines the document the pipeline publishes, without any
//! knowledge of the upstream tables it is built from. The store persists the
//! document next to the upstream revision fingerprint it was built from, so a
//! later run can reuse it verbatim.

pub mod store;
pub mod types;

pub use store::{OutputStore, StoreError};
pub use types::*;
