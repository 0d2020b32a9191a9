#![forbid(unsafe_code)]

//! The table controller.
//!
//! [`Table`] pairs the column descriptors and configuration supplied at
//! mount with the user-mutable [`ViewState`], and is the single place
//! where "derive the view on every state mutation" happens: the embedder
//! feeds it events and calls [`Table::derive`] after each one; there is
//! no reactivity runtime underneath.

use tabula_core::{Result, TypeRegistry};

use crate::column::Column;
use crate::config::TableConfig;
use crate::pipeline::{View, derive_view};
use crate::state::{TableEvent, ViewState};

/// A mounted table instance: columns, configuration, and view state.
///
/// The dataset and the type registry stay externally owned: the
/// embedder may replace the dataset reference between events and the
/// next derivation simply operates on the new reference, with
/// sort/search/page state carried over.
#[derive(Debug)]
pub struct Table<R> {
    columns: Vec<Column<R>>,
    config: TableConfig,
    state: ViewState,
}

impl<R> Table<R> {
    /// Mount a table over an ordered column sequence with the default
    /// configuration.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            config: TableConfig::default(),
            state: ViewState::new(),
        }
    }

    /// Set the configuration (builder).
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// The column descriptors, in display order.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// The active configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The current sort/search/page state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Apply a user event to the view state. The caller is expected to
    /// follow up with [`Table::derive`] to obtain the updated view.
    pub fn handle_event(&mut self, event: &TableEvent) {
        self.state.handle_event(event);
    }

    /// Run the pure derivation pipeline over `rows`, then reconcile the
    /// stored page index with the page count it produced.
    ///
    /// The returned view reflects the state *as it was* when the event
    /// fired, so a narrowing search may yield an empty page this cycle;
    /// the reconciliation pulls the page index back into range so the
    /// following derivation lands on a valid page.
    pub fn derive<'a>(&mut self, rows: &'a [R], registry: &TypeRegistry) -> Result<View<'a, R>> {
        let view = derive_view(rows, &self.columns, registry, &self.state, &self.config)?;
        self.state.clamp_to_pages(view.num_pages());
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PageControl, SortIndicator};
    use tabula_core::Value;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        n: i64,
    }

    fn table() -> Table<Item> {
        Table::new(vec![
            Column::new("Name", "string", |item: &Item| Value::from(item.name)),
            Column::new("N", "number", |item: &Item| Value::Int(item.n)),
        ])
        .with_config(TableConfig::default().search(true))
    }

    fn dataset() -> Vec<Item> {
        const NAMES: [&str; 5] = ["alpha", "bravo", "charlie", "delta", "echo"];
        (0..25)
            .map(|i| Item {
                name: NAMES[i as usize % 5],
                n: i,
            })
            .collect()
    }

    fn ns(view: &View<'_, Item>) -> Vec<i64> {
        view.rows().iter().map(|item| item.n).collect()
    }

    #[test]
    fn derive_updates_observed_page_count() {
        let data = dataset();
        let registry = TypeRegistry::with_builtins();
        let mut table = table();
        assert_eq!(table.state().num_pages(), 1);
        table.derive(&data, &registry).unwrap();
        assert_eq!(table.state().num_pages(), 3);
    }

    #[test]
    fn event_then_derive_cycle() {
        let data = dataset();
        let registry = TypeRegistry::with_builtins();
        let mut table = table();
        table.derive(&data, &registry).unwrap();

        table.handle_event(&TableEvent::PageControl(PageControl::Next));
        let view = table.derive(&data, &registry).unwrap();
        assert_eq!(ns(&view), (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn search_narrowing_clamps_on_next_cycle() {
        let data = dataset();
        let registry = TypeRegistry::with_builtins();
        let mut table = table();
        table.derive(&data, &registry).unwrap();

        // Walk to the last page, then narrow to a one-page result set.
        table.handle_event(&TableEvent::PageControl(PageControl::Goto(2)));
        table.derive(&data, &registry).unwrap();
        table.handle_event(&TableEvent::SearchChanged("alpha".into()));

        // This cycle still derives with page 2: a well-defined empty
        // page, not an error.
        let narrowed = table.derive(&data, &registry).unwrap();
        assert!(narrowed.is_empty());
        assert_eq!(narrowed.num_pages(), 1);

        // The reconciliation pulled the page back; the next cycle shows
        // the matches.
        assert_eq!(table.state().page, 0);
        let settled = table.derive(&data, &registry).unwrap();
        assert_eq!(settled.len(), 5);
    }

    #[test]
    fn resort_keeps_page_but_changes_row_identities() {
        let data = dataset();
        let registry = TypeRegistry::with_builtins();
        let mut table = table();
        table.derive(&data, &registry).unwrap();
        table.handle_event(&TableEvent::PageControl(PageControl::Goto(1)));
        let before = table.derive(&data, &registry).unwrap();
        assert_eq!(ns(&before), (10..20).collect::<Vec<_>>());

        table.handle_event(&TableEvent::ColumnActivated(1));
        table.handle_event(&TableEvent::ColumnActivated(1));
        let after = table.derive(&data, &registry).unwrap();
        // Same page index, different occupants under the new order.
        assert_eq!(table.state().page, 1);
        assert_eq!(ns(&after), (5..15).rev().collect::<Vec<_>>());
    }

    #[test]
    fn dataset_replacement_keeps_state() {
        let data = dataset();
        let registry = TypeRegistry::with_builtins();
        let mut table = table();
        table.derive(&data, &registry).unwrap();
        table.handle_event(&TableEvent::PageControl(PageControl::Next));
        table.derive(&data, &registry).unwrap();

        let replacement: Vec<Item> = (0..12).map(|i| Item { name: "x", n: i }).collect();
        let view = table.derive(&replacement, &registry).unwrap();
        // Page 1 of the new dataset, state carried over.
        assert_eq!(ns(&view), vec![10, 11]);
        assert_eq!(view.num_pages(), 2);
    }

    #[test]
    fn header_indicators_follow_events() {
        let data = dataset();
        let registry = TypeRegistry::with_builtins();
        let mut table = table();
        table.handle_event(&TableEvent::ColumnActivated(0));
        let view = table.derive(&data, &registry).unwrap();
        assert_eq!(
            view.indicators(),
            &[SortIndicator::Ascending, SortIndicator::None]
        );
    }

    #[test]
    fn types_registered_after_mount_are_picked_up() {
        let data = dataset();
        let mut registry = TypeRegistry::with_builtins();
        let mut table = Table::new(vec![Column::new("N", "roman", |item: &Item| {
            Value::Int(item.n)
        })]);
        table.handle_event(&TableEvent::ColumnActivated(0));
        assert!(table.derive(&data, &registry).is_err());

        // Names are resolved on every derivation, so registering now is
        // enough; nothing about the table needs rebuilding.
        registry.register(
            "roman",
            tabula_core::TypeDescriptor::new(|a: &Value, b: &Value| {
                a.as_f64()
                    .partial_cmp(&b.as_f64())
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        );
        let view = table.derive(&data, &registry).unwrap();
        assert_eq!(view.rows()[0].n, 0);
    }

    #[test]
    fn derive_error_leaves_state_untouched() {
        let data = dataset();
        let registry = TypeRegistry::new(); // nothing registered
        let mut table = table();
        table.handle_event(&TableEvent::ColumnActivated(0));
        assert!(table.derive(&data, &registry).is_err());
        // State is still what the events produced; a later derivation
        // against a complete registry succeeds.
        assert_eq!(table.state().sort.column, Some(0));
        let complete = TypeRegistry::with_builtins();
        assert!(table.derive(&data, &complete).is_ok());
    }
}
