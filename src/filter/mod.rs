//! Page filter module
//!
//! Renders the brightness/sepia CSS rule and writes it to the page.
//!
//! # Architecture
//!
//! - `FilterRule`: the brightness/sepia pair for the current phase, rendered as one CSS rule
//! - `StyleSink`: where rules are written, keyed by a fixed style identifier
//! - `PageStyles`: in-memory document head, one node per identifier
//! - `StylesheetFile`: user stylesheet on disk holding the single rule
//!
//! # Output
//!
//! ```text
//! html { filter: brightness(90%) sepia(40%) !important; transition: filter 0.5s ease-in-out !important; }
//! ```
//!
//! Writing a rule replaces the previous one with the same identifier, so at most
//! one filter rule is ever live.

pub mod sink;
pub mod style;

pub use sink::{PageStyles, StyleNode, StyleSink, StylesheetFile};
pub use style::{FilterRule, STYLE_ID};
