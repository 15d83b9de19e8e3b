//! Spire Analytics Library
//!
//! Analytics engine for a contribution-tower year-in-review experience. The
//! library converts a raw GitHub-shaped contribution payload (user/viewer
//! envelope, contribution calendar, repositories) into the [`Blueprint`]
//! consumed by rendering and UI collaborators: a layered geometric model (one
//! floor per calendar week) plus a rich statistics report with streaks,
//! droughts, distributions, a named ranking tier and detected remarkable
//! events.
//!
//! ## Architecture Overview
//!
//! The library is organized around several key modules:
//!
//! - [`models`] - Core data structures for the calendar, floors, events and
//!   the assembled blueprint
//! - [`ingest`] - Payload deserialization, user/viewer envelope resolution and
//!   normalization with defaulting
//! - [`stats`] - Single-pass aggregation of the flattened day sequence
//! - [`floors`] - Week-to-floor geometric transforms
//! - [`events`] - Peak/drought/milestone detection and floor marking
//! - [`ranking`] - Ordered tier classification cascade
//! - [`languages`] - Top-language percentage breakdown
//! - [`blueprint`] - Pipeline coordination and the canonical empty blueprint
//! - [`locale`] - Injected month-name localization
//! - [`story`] / [`display`] - Presentation-side chapter sequencing and report
//!   rendering
//! - [`config`] / [`logging`] - Runtime configuration and structured logging
//!
//! ## Main Entry Point
//!
//! ```rust
//! use spire::{build_blueprint, Locale};
//!
//! let payload = serde_json::from_str(r#"{"viewer": null}"#).unwrap();
//! let blueprint = build_blueprint(payload, Locale::En);
//! assert!(blueprint.floors.is_empty());
//! ```
//!
//! Every transformation is a synchronous pure function over an in-memory
//! snapshot: the same payload always yields a structurally identical
//! blueprint, and absent data yields the canonical empty blueprint rather
//! than an error.

pub mod blueprint;
pub mod config;
pub mod display;
pub mod events;
pub mod floors;
pub mod ingest;
pub mod languages;
pub mod locale;
pub mod logging;
pub mod models;
pub mod ranking;
pub mod stats;
pub mod story;

pub use blueprint::build_blueprint;
pub use ingest::RawPayload;
pub use locale::Locale;
pub use models::*;
pub use ranking::Rank;
