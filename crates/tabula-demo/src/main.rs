#![forbid(unsafe_code)]

//! Plain-text demo embedder.
//!
//! Stands in for the presentation layer: drives a [`Table`] with user
//! events and renders each derived view to stdout using the registry's
//! per-type format and alignment hints. The core never sees any of
//! this; it only hands back rows, a page count, and sort indicators.

use tabula::prelude::*;
use unicode_width::UnicodeWidthStr;

struct Track {
    title: &'static str,
    artist: &'static str,
    plays: i64,
    rating: f64,
}

fn dataset() -> Vec<Track> {
    vec![
        Track { title: "Blue Monday", artist: "New Order", plays: 1_204_331, rating: 4.7 },
        Track { title: "Atmosphere", artist: "Joy Division", plays: 804_112, rating: 4.9 },
        Track { title: "Age of Consent", artist: "New Order", plays: 911_554, rating: 4.5 },
        Track { title: "Disorder", artist: "Joy Division", plays: 653_009, rating: 4.6 },
        Track { title: "Temptation", artist: "New Order", plays: 700_123, rating: 4.2 },
        Track { title: "Decades", artist: "Joy Division", plays: 402_887, rating: 4.8 },
        Track { title: "Ceremony", artist: "New Order", plays: 598_443, rating: 4.4 },
        Track { title: "Transmission", artist: "Joy Division", plays: 881_092, rating: 4.3 },
        Track { title: "Your Silent Face", artist: "New Order", plays: 455_781, rating: 4.1 },
        Track { title: "Isolation", artist: "Joy Division", plays: 509_227, rating: 4.0 },
        Track { title: "Crystal", artist: "New Order", plays: 389_445, rating: 3.9 },
        Track { title: "Shadowplay", artist: "Joy Division", plays: 612_320, rating: 4.6 },
    ]
}

fn columns() -> Vec<Column<Track>> {
    vec![
        Column::new("Title", "string", |t: &Track| Value::from(t.title)),
        Column::new("Artist", "string", |t: &Track| Value::from(t.artist)),
        Column::new("Plays", "number", |t: &Track| Value::Int(t.plays)),
        Column::new("Rating", "stars", |t: &Track| Value::Float(t.rating)),
    ]
}

/// Registry with the built-ins plus a custom "stars" type registered by
/// this embedder.
fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_builtins();
    registry.register(
        "stars",
        TypeDescriptor::new(|a: &Value, b: &Value| {
            a.as_f64()
                .unwrap_or(0.0)
                .total_cmp(&b.as_f64().unwrap_or(0.0))
        })
        .with_alignment(Alignment::Right)
        .with_format(|v| format!("{v} *")),
    );
    registry
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let gap = width.saturating_sub(text.width());
    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(gap)),
        Alignment::Right => format!("{}{text}", " ".repeat(gap)),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

fn indicator_mark(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::None => "",
        SortIndicator::Ascending => " ^",
        SortIndicator::Descending => " v",
    }
}

fn print_view(table: &Table<Track>, registry: &TypeRegistry, view: &View<'_, Track>) -> Result<()> {
    let columns = table.columns();

    let headers: Vec<String> = columns
        .iter()
        .zip(view.indicators())
        .map(|(column, indicator)| format!("{}{}", column.name(), indicator_mark(*indicator)))
        .collect();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(view.len());
    for row in view.rows() {
        let mut line = Vec::with_capacity(columns.len());
        for column in columns {
            let descriptor = registry.resolve(column.type_name())?;
            line.push(descriptor.format(&column.value(row)));
        }
        cells.push(line);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.width());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w, Alignment::Left))
        .collect();
    println!("{}", header_line.join("  "));

    for line in &cells {
        let mut rendered = Vec::with_capacity(columns.len());
        for ((cell, width), column) in line.iter().zip(&widths).zip(columns) {
            let alignment = registry.resolve(column.type_name())?.alignment();
            rendered.push(pad(cell, *width, alignment));
        }
        println!("{}", rendered.join("  "));
    }

    println!(
        "page {}/{} ({} rows shown)",
        table.state().page + 1,
        view.num_pages(),
        view.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    let tracks = dataset();
    let registry = registry();
    let mut table =
        Table::new(columns()).with_config(TableConfig::new().page_size(5).search(true));

    println!("-- initial view --");
    let view = table.derive(&tracks, &registry)?;
    print_view(&table, &registry, &view)?;

    println!("\n-- sorted by plays, descending --");
    table.handle_event(&TableEvent::ColumnActivated(2));
    table.handle_event(&TableEvent::ColumnActivated(2));
    let view = table.derive(&tracks, &registry)?;
    print_view(&table, &registry, &view)?;

    println!("\n-- next page --");
    table.handle_event(&TableEvent::PageControl(PageControl::Next));
    let view = table.derive(&tracks, &registry)?;
    print_view(&table, &registry, &view)?;

    println!("\n-- search \"joy\" --");
    table.handle_event(&TableEvent::SearchChanged("joy".into()));
    // First cycle after narrowing may land past the end; derive again to
    // settle on the clamped page.
    table.derive(&tracks, &registry)?;
    let view = table.derive(&tracks, &registry)?;
    print_view(&table, &registry, &view)?;

    Ok(())
}
