//!
//! Dotmap: Swiss-army-knife utilities for nested, loosely-typed containers.
//!
//! The library operates on a dynamic [`Value`] model (the shapes that come
//! out of decoded configuration, JSON payloads, or tabular rows) and layers
//! a small set of engines on top of it:
//!
//! * **Path resolution** (`resolve`): dot-notation `get`/`set`/`has`/`forget`
//!   and the operations built on them (`pull`, `add`, `remember`, `ensure`,
//!   `transform`). A literal top-level key always shadows traversal.
//! * **Flattening** (`flatten`): bidirectional conversion between nested
//!   containers and flat `path -> value` maps (`dot`/`undot`/`paths`).
//! * **Grouping** (`group`): classification of record lists into buckets,
//!   keyed maps, counts, and parent/child trees.
//! * **Combinators** (`combine`): cross products, multi-key stable sorting
//!   under a total value ordering, recursive diff and merge, structural
//!   equality.
//! * **Chaining** (`chain`): a fluent [`Chain`] wrapper that exposes all of
//!   the above as consuming methods.
//!
//! Everything operates on fully materialized in-memory containers and
//! returns synchronously.
//!
//! ```
//! use dotmap::{Chain, Value};
//!
//! let profile = Chain::from_json(r#"{"user":{"name":"Alice","age":30}}"#)?
//!     .set("user.active", true)
//!     .forget("user.age");
//!
//! assert_eq!(profile.get("user.name"), Some(&Value::Text("Alice".into())));
//! assert!(!profile.has("user.age"));
//! # Ok::<(), dotmap::Error>(())
//! ```

pub mod chain;
pub mod combine;
pub mod errors;
pub mod flatten;
pub mod group;
pub mod path;
pub mod resolve;
pub mod value;

pub use chain::Chain;
pub use combine::Direction;
pub use errors::Error;
pub use path::{Path, PathBuf};
pub use value::{List, Map, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
