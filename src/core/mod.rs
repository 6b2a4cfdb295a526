//! Core types - pure abstractions shared across the codebase.

mod id;
mod segment;
mod url;

pub use id::{ContentId, DEFAULT_ID_PREFIX, ID_HEX_LEN, ID_PREFIX_LEN};
pub use segment::PathKind;
pub use url::RoutePath;
