//! Upstream table fetchers.
//!
//! Every fetcher retrieves the primary-locale (Global/YoStar) and
//! region-variant (CN) documents concurrently, validates both before anything
//! is merged, then decodes them into the typed shapes in [`raw`] and returns
//! the merged result. Any failure aborts the fetch.

pub mod building;
pub mod character;
pub mod client;
pub mod error;
pub mod fetch;
pub mod item;
pub mod merge;
pub mod module;
pub mod raw;
pub mod skill;
pub mod sources;
pub mod version;

mod validate;

pub use building::fetch_recipes;
pub use character::{OperatorRecord, fetch_operators};
pub use client::HttpTransport;
pub use error::TableError;
pub use item::{ItemData, fetch_items};
pub use module::{ModuleLookup, OperatorModule, fetch_modules};
pub use skill::{SkillInfo, fetch_skills};
pub use version::fetch_commit_hashes;
