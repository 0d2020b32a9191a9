#![forbid(unsafe_code)]

//! The view derivation pipeline.
//!
//! [`derive_view`] is a pure function of its five inputs: it sorts,
//! filters, and slices row *references*, never mutating rows or state,
//! and produces identical output for identical inputs. That referential
//! transparency is what makes the pipeline testable without any
//! rendering environment.

use tabula_core::{Result, TableError, TypeRegistry};

use crate::column::Column;
use crate::config::TableConfig;
use crate::state::{Direction, SortIndicator, ViewState};

// ---------------------------------------------------------------------------
// View snapshot
// ---------------------------------------------------------------------------

/// The per-derivation snapshot handed to the presentation layer: the
/// ordered visible row slice, the total page count, and one sort
/// indicator per column for header rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a, R> {
    rows: Vec<&'a R>,
    num_pages: usize,
    indicators: Vec<SortIndicator>,
}

impl<'a, R> View<'a, R> {
    /// The visible rows, in display order.
    pub fn rows(&self) -> &[&'a R] {
        &self.rows
    }

    /// Total page count; always ≥ 1, and exactly 1 when pagination is
    /// disabled.
    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// Sort indicators, one per column in column order.
    pub fn indicators(&self) -> &[SortIndicator] {
        &self.indicators
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the visible slice is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive the visible view from the full dataset and the current
/// sort/search/page state.
///
/// Stages apply in strict order (sort, then search, then paginate)
/// with each stage's output feeding the next.
///
/// # Errors
///
/// - [`TableError::UnknownType`] if a resolved column references an
///   unregistered type name.
/// - [`TableError::ColumnOutOfRange`] if the sort column does not index
///   into `columns` (a caller programming error; not clamped).
/// - [`TableError::InvalidPageSize`] if pagination is enabled with a
///   zero page size.
pub fn derive_view<'a, R>(
    rows: &'a [R],
    columns: &[Column<R>],
    registry: &TypeRegistry,
    state: &ViewState,
    config: &TableConfig,
) -> Result<View<'a, R>> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "derive_view",
        rows = rows.len(),
        columns = columns.len(),
        page = state.page,
    )
    .entered();

    if config.pagination && config.page_size == 0 {
        return Err(TableError::InvalidPageSize);
    }

    let sorted = sort_stage(rows, columns, registry, state)?;
    let filtered = search_stage(sorted, columns, registry, state, config)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(filtered = filtered.len(), "post-search row count");

    let (visible, num_pages) = page_stage(filtered, state.page, config);

    let indicators = (0..columns.len()).map(|i| state.indicator(i)).collect();

    Ok(View {
        rows: visible,
        num_pages,
        indicators,
    })
}

/// Sort stage. With no active sort column the dataset passes through in
/// original relative order, the pipeline's only ordering guarantee in
/// that mode. Otherwise rows sort by the resolved type's comparator over
/// the column's selected values; descending reverses the ascending
/// result rather than inverting the comparator, so equal-valued groups
/// keep the same internal order in both directions.
fn sort_stage<'a, R>(
    rows: &'a [R],
    columns: &[Column<R>],
    registry: &TypeRegistry,
    state: &ViewState,
) -> Result<Vec<&'a R>> {
    let mut refs: Vec<&R> = rows.iter().collect();

    let Some(index) = state.sort.column else {
        return Ok(refs);
    };
    let column = columns.get(index).ok_or(TableError::ColumnOutOfRange {
        index,
        len: columns.len(),
    })?;
    let descriptor = registry.resolve(column.type_name())?;

    refs.sort_by(|a, b| descriptor.compare(&column.value(a), &column.value(b)));
    if state.sort.direction == Direction::Descending {
        refs.reverse();
    }
    Ok(refs)
}

/// Search stage. Retains rows where at least one column's text
/// representation contains the search string case-insensitively
/// (logical OR across columns; no per-column scoping). Inert when the
/// search string is empty or search is disabled by configuration.
fn search_stage<'a, R>(
    rows: Vec<&'a R>,
    columns: &[Column<R>],
    registry: &TypeRegistry,
    state: &ViewState,
    config: &TableConfig,
) -> Result<Vec<&'a R>> {
    if !config.search || state.search.is_empty() {
        return Ok(rows);
    }

    // Resolve every column eagerly so an unregistered type surfaces even
    // when an earlier column already decides the match.
    let descriptors = columns
        .iter()
        .map(|column| registry.resolve(column.type_name()))
        .collect::<Result<Vec<_>>>()?;

    let needle = state.search.to_lowercase();
    let matches = |row: &&'a R| {
        columns.iter().zip(&descriptors).any(|(column, descriptor)| {
            descriptor
                .text(&column.value(row))
                .to_lowercase()
                .contains(&needle)
        })
    };

    Ok(rows.into_iter().filter(|row| matches(row)).collect())
}

/// Paginate stage. With pagination disabled everything passes through
/// as a single page. An out-of-range page index yields a well-defined
/// empty slice; clamping the *state* back into range is the interaction
/// layer's job on the next cycle.
fn page_stage<'a, R>(
    rows: Vec<&'a R>,
    page: usize,
    config: &TableConfig,
) -> (Vec<&'a R>, usize) {
    if !config.pagination {
        return (rows, 1);
    }
    let num_pages = rows.len().div_ceil(config.page_size).max(1);
    let start = page.saturating_mul(config.page_size).min(rows.len());
    let end = start.saturating_add(config.page_size).min(rows.len());
    (rows[start..end].to_vec(), num_pages)
}
