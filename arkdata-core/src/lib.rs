//! Shared building blocks for the arkdata workspace: the shape normalizer for
//! upstream tables, the schema/fetch error taxonomy, the `Transport` seam used
//! by every network-facing crate, and a few domain enums shared across crates.

pub mod assets;
pub mod error;
pub mod normalize;
pub mod profession;
pub mod rarity;
pub mod transport;

pub use error::{FetchError, SchemaError, ShapeError};
pub use normalize::{normalize, normalize_field};
pub use profession::{Profession, ProfessionParseError};
pub use rarity::Rarity;
pub use transport::{MemoryTransport, Transport};

/// Item id of LMD, the main currency. Also used as the synthetic gold cost line.
pub const GOLD_ITEM_ID: &str = "4001";

/// Item id of the purchase certificate currency.
pub const CERTIFICATE_ITEM_ID: &str = "4006";
