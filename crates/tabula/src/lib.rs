#![forbid(unsafe_code)]

//! tabula public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for embedders.
//! It re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use tabula::prelude::*;
//!
//! struct Person {
//!     name: &'static str,
//!     age: i64,
//! }
//!
//! let people = vec![
//!     Person { name: "Ada", age: 36 },
//!     Person { name: "Grace", age: 45 },
//!     Person { name: "Alan", age: 41 },
//! ];
//!
//! let registry = TypeRegistry::with_builtins();
//! let mut table = Table::new(vec![
//!     Column::new("Name", "string", |p: &Person| Value::from(p.name)),
//!     Column::new("Age", "number", |p: &Person| Value::Int(p.age)),
//! ]);
//!
//! table.handle_event(&TableEvent::ColumnActivated(1));
//! let view = table.derive(&people, &registry)?;
//! assert_eq!(view.rows()[0].name, "Ada");
//! # Ok::<(), TableError>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tabula_core::{Alignment, Result, TableError, TypeDescriptor, TypeRegistry, Value};

// --- View re-exports -------------------------------------------------------

pub use tabula_view::{
    Column, DEFAULT_PAGE_SIZE, Direction, PageControl, SortIndicator, SortState, Table,
    TableConfig, TableEvent, View, ViewState, derive_view,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Column, PageControl, Result, SortIndicator, Table, TableConfig, TableError,
        TableEvent, TypeDescriptor, TypeRegistry, Value, View, ViewState, derive_view,
    };

    pub use crate::{core, view};
}

pub use tabula_core as core;
pub use tabula_view as view;
