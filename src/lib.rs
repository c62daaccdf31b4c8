//! List Placement - reorder records by declarative placement hints
//!
//! Each record may ask to sit at an absolute index (`{ "at": 2 }`), or right
//! after or before another record (`{ "after": "a" }`, `{ "before": "a" }`).
//! All hints are resolved together into one permutation. Anchors to records
//! that do not exist are ignored, colliding indices keep their input order,
//! and records without a usable hint stay at their occurrence index.
//!
//! # Example
//!
//! ```rust
//! use list_placement::{rearrange, PlacementConfig};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({ "id": "b", "position": { "after": "a" } }),
//!     json!({ "id": "a", "position": { "at": 1 } }),
//! ];
//!
//! let ordered = rearrange(&PlacementConfig::default(), records).unwrap();
//! assert_eq!(ordered[0]["id"], "a");
//! assert_eq!(ordered[1]["id"], "b");
//! ```
//!
//! Rearranging is not idempotent: `at` hints and occurrence fallbacks are
//! positional, so running the output through again can move records.

pub mod config;
pub mod error;
pub mod placement;
pub mod record;

pub use config::{ConfigError, PlacementConfig};
pub use error::{SpecifierError, ERR_INVALID_SPECIFIER};
pub use placement::{plan, OrderSpec, Plan, PlacementError, Specifier};
pub use record::Record;

/// Reordered records along with the specifiers that could not be decoded
#[derive(Debug, Clone, PartialEq)]
pub struct Rearranged<R> {
    /// Malformed specifiers, in record then declaration order
    pub errors: Vec<SpecifierError>,
    /// The records in their new order
    pub list: Vec<R>,
}

/// Rearrange records, discarding specifier errors
///
/// # Example
///
/// ```rust
/// use list_placement::{rearrange, PlacementConfig};
/// use serde_json::json;
///
/// let records = vec![
///     json!({ "id": "a", "position": { "at": 0 } }),
///     json!({ "id": "b", "position": { "before": "a" } }),
/// ];
///
/// let ordered = rearrange(&PlacementConfig::default(), records).unwrap();
/// let ids: Vec<_> = ordered.iter().map(|r| r["id"].as_str().unwrap()).collect();
/// assert_eq!(ids, ["b", "a"]);
/// ```
pub fn rearrange<R: Record>(
    config: &PlacementConfig,
    records: Vec<R>,
) -> Result<Vec<R>, PlacementError> {
    rearrange_with_errors(config, records).map(|rearranged| rearranged.list)
}

/// Rearrange records and report malformed specifiers.
///
/// Malformed specifiers never stop the rearrangement; the affected records
/// fall through to their next candidate. Only missing or duplicate
/// identifiers and anchor cycles are fatal.
///
/// # Example
///
/// ```rust
/// use list_placement::{rearrange_with_errors, PlacementConfig};
/// use serde_json::json;
///
/// let records = vec![
///     json!({ "id": "a", "position": { "above": "b" } }),
///     json!({ "id": "b" }),
/// ];
///
/// let result = rearrange_with_errors(&PlacementConfig::default(), records).unwrap();
/// assert_eq!(result.errors.len(), 1);
/// assert_eq!(result.errors[0].tag(), "above");
/// assert_eq!(result.list.len(), 2);
/// ```
pub fn rearrange_with_errors<R: Record>(
    config: &PlacementConfig,
    records: Vec<R>,
) -> Result<Rearranged<R>, PlacementError> {
    let plan = plan(config, &records)?;
    let list = plan.apply(records);

    Ok(Rearranged {
        errors: plan.into_errors(),
        list,
    })
}
