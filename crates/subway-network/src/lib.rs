//! `subway-network` — station and line directory.
//!
//! The topology and path crates work purely on IDs and never own stations.
//! [`Network`] is the collaborator that does: it hands out `StationId`s and
//! `LineId`s, resolves them, serializes mutations per line (everything takes
//! `&mut self`), and turns engine output back into named stations.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`network`] | `Network`, `Route`                                        |
//! | [`loader`]  | `load_network_csv`, `load_network_reader`                 |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                        |

pub mod error;
pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_csv, load_network_reader};
pub use network::{Network, Route};
