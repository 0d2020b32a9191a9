#![forbid(unsafe_code)]

//! Column descriptors.

use std::fmt;

use tabula_core::Value;

type SelectorFn<R> = Box<dyn Fn(&R) -> Value + Send + Sync>;

/// Pairing of a display label, a value extractor, and a type name.
///
/// The selector must be a total, side-effect-free function of a row.
/// Columns are immutable for the lifetime of a rendering session; the
/// type name is resolved against the registry on every derivation, so a
/// column may legitimately reference a type registered after the column
/// was built.
pub struct Column<R> {
    name: String,
    type_name: String,
    selector: SelectorFn<R>,
}

impl<R> Column<R> {
    /// Create a column from its display label, type name, and selector.
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        selector: impl Fn(&R) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            selector: Box::new(selector),
        }
    }

    /// Display label for the column header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered type name governing compare/format/search behavior.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Extract this column's cell value from a row.
    pub fn value(&self, row: &R) -> Value {
        (self.selector)(row)
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
