#![forbid(unsafe_code)]

//! Per-type behavior descriptors and the type registry.
//!
//! Every column names a *type* ("string", "number", or anything the
//! embedder registers), and the registry maps that name to a
//! [`TypeDescriptor`] bundling the comparison, alignment, formatting,
//! and search-text behavior for cells of that type.
//!
//! The registry is an explicit, caller-constructed object handed to the
//! derivation pipeline; there is no ambient process-wide state, so two
//! table instances can carry entirely different registries and
//! registration order cannot affect correctness. Registration after a
//! table is constructed is fine: the pipeline resolves names eagerly on
//! every derivation instead of caching descriptors.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, TableError};
use crate::value::Value;

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Horizontal cell alignment hint for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align left (the default; used by the built-in "string" type).
    #[default]
    Left,
    /// Align right (used by the built-in "number" type).
    Right,
    /// Align center.
    Center,
}

// ---------------------------------------------------------------------------
// Type Descriptor
// ---------------------------------------------------------------------------

type CompareFn = Box<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;
type RenderFn = Box<dyn Fn(&Value) -> String + Send + Sync>;

/// Pluggable behavior for one column type.
///
/// Only the comparator is required; alignment defaults to left and the
/// `format`/`text` functions fall back to plain string coercion of the
/// cell value.
///
/// # Invariants
///
/// The comparator must be a strict weak ordering (antisymmetric,
/// transitive, consistent with equality) over every value a column of
/// this type can produce, or sort results are undefined.
pub struct TypeDescriptor {
    compare: CompareFn,
    alignment: Alignment,
    format: Option<RenderFn>,
    text: Option<RenderFn>,
}

impl TypeDescriptor {
    /// Create a descriptor from its comparator.
    pub fn new(compare: impl Fn(&Value, &Value) -> Ordering + Send + Sync + 'static) -> Self {
        Self {
            compare: Box::new(compare),
            alignment: Alignment::default(),
            format: None,
            text: None,
        }
    }

    /// Set the alignment hint (builder).
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the display formatter (builder).
    pub fn with_format(mut self, format: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    /// Set the search-text extractor (builder).
    pub fn with_text(mut self, text: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        self.text = Some(Box::new(text));
        self
    }

    /// Compare two cell values of this type.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        (self.compare)(a, b)
    }

    /// Alignment hint for the presentation layer.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Render a value for display, falling back to string coercion.
    pub fn format(&self, value: &Value) -> String {
        match &self.format {
            Some(f) => f(value),
            None => value.to_string(),
        }
    }

    /// Text representation used for search matching, falling back to
    /// string coercion.
    pub fn text(&self, value: &Value) -> String {
        match &self.text {
            Some(f) => f(value),
            None => value.to_string(),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("alignment", &self.alignment)
            .field("format", &self.format.is_some())
            .field("text", &self.text.is_some())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Built-in comparators and formatting
// ---------------------------------------------------------------------------

/// Binary string comparison over text coercions. Locale collation is out
/// of scope; `Str` payloads take a no-allocation fast path.
fn compare_strings(a: &Value, b: &Value) -> Ordering {
    match (a.as_str(), b.as_str()) {
        (Some(x), Some(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// Total numeric comparison. Integer pairs compare exactly; mixed pairs
/// compare as `f64` with `total_cmp`. Values with no numeric coercion
/// order before numeric ones, keeping the comparator total.
fn compare_numbers(a: &Value, b: &Value) -> Ordering {
    if let (Value::Int(x), Value::Int(y)) = (a, b) {
        return x.cmp(y);
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Insert thousands separators into the integer part of a plain decimal
/// rendering. Non-decimal renderings ("inf", "NaN") pass through.
fn group_thousands(text: &str) -> String {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", text),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return text.to_string();
    }

    let digits = int_part.len();
    let mut out = String::with_capacity(text.len() + digits / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn format_number(value: &Value) -> String {
    match value {
        Value::Int(_) | Value::Float(_) => group_thousands(&value.to_string()),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Type Registry
// ---------------------------------------------------------------------------

/// Mapping from type names to [`TypeDescriptor`]s.
///
/// [`TypeRegistry::default`] comes seeded with the built-in "string" and
/// "number" types; [`TypeRegistry::new`] starts empty for embedders that
/// want full control. `register` inserts or replaces with no further
/// validation (last write wins).
pub struct TypeRegistry {
    types: HashMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry with no types at all.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Create a registry seeded with the built-in "string" and "number"
    /// descriptors.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("string", TypeDescriptor::new(compare_strings));
        registry.register(
            "number",
            TypeDescriptor::new(compare_numbers)
                .with_alignment(Alignment::Right)
                .with_format(format_number)
                .with_text(|value| value.to_string()),
        );
        registry
    }

    /// Insert or replace the descriptor for `name`.
    pub fn register(&mut self, name: impl Into<String>, descriptor: TypeDescriptor) {
        self.types.insert(name.into(), descriptor);
    }

    /// Look up the descriptor for `name`.
    pub fn resolve(&self, name: &str) -> Result<&TypeDescriptor> {
        self.types.get(name).ok_or_else(|| TableError::UnknownType {
            name: name.to_string(),
        })
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry has no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("TypeRegistry").field("types", &names).finish()
    }
}
