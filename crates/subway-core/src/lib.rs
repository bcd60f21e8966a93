//! `subway-core` — foundational types for the `subway` workspace.
//!
//! Every other `subway-*` crate depends on this one.  It has no `subway-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                      |
//! |---------------|-----------------------------------------------|
//! | [`ids`]       | `StationId`, `LineId`                         |
//! | [`station`]   | `Station`, `Distance`                         |
//! | [`error`]     | `CoreError`, `CoreResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod station;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{LineId, StationId};
pub use station::{Distance, Station};
