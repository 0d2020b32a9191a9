#![forbid(unsafe_code)]

//! View-state logic for a sortable, searchable, paginated data table.
//!
//! The pieces compose in one direction:
//!
//! - [`Column`] descriptors pair a header label with a value selector
//!   and a type name resolved against a
//!   [`TypeRegistry`](tabula_core::TypeRegistry).
//! - [`ViewState`] tracks the user-mutable sort/search/page tuple and
//!   transitions it in response to [`TableEvent`]s.
//! - [`derive_view`] is the pure sort → search → paginate pipeline
//!   mapping dataset + state to the visible row slice.
//! - [`Table`] binds the three together as the single
//!   mutation-then-derive entry point for embedders.
//!
//! Rendering is deliberately absent: the presentation layer consumes
//! the derived [`View`] (rows, page count, sort indicators) and the
//! registry's per-type format/alignment hints, and draws however it
//! likes.

pub mod column;
pub mod config;
pub mod pipeline;
pub mod state;
pub mod table;

pub use column::Column;
pub use config::{DEFAULT_PAGE_SIZE, TableConfig};
pub use pipeline::{View, derive_view};
pub use state::{Direction, PageControl, SortIndicator, SortState, TableEvent, ViewState};
pub use table::Table;
