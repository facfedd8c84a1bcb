use crate::source::Grid;
use gavel_core::catalog::{Catalog, CatalogView, TypeCategory, TypeDef};
use std::fmt::Write;

const MAX_CELL_WIDTH: usize = 36;
const EMPTY_MESSAGE: &str = "No data available";

/// Render one table page: header row, separator, cells, footer.
#[must_use]
pub fn table(title: &str, grid: &Grid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");

    if grid.rows.is_empty() {
        let _ = writeln!(out, "  {EMPTY_MESSAGE}");
        return out;
    }

    let widths = column_widths(grid);
    let header_line = render_row(
        &grid
            .headers
            .iter()
            .map(|header| (*header).to_string())
            .collect::<Vec<_>>(),
        &widths,
    );
    let _ = writeln!(out, "{header_line}");
    let _ = writeln!(out, "{}", separator(&widths));

    for row in &grid.rows {
        let _ = writeln!(out, "{}", render_row(row, &widths));
    }

    if let Some((from, to)) = grid.showing {
        let _ = write!(out, "Showing {from} to {to} of {} results", grid.filtered);
        if grid.total_pages > 1 {
            let _ = write!(out, " - page {} of {}", grid.page, grid.total_pages);
        }
        let _ = writeln!(out);
    }

    out
}

fn column_widths(grid: &Grid) -> Vec<usize> {
    let mut widths: Vec<usize> = grid
        .headers
        .iter()
        .map(|header| header.chars().count())
        .collect();

    for row in &grid.rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count()).min(MAX_CELL_WIDTH);
            }
        }
    }

    widths
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (index, cell) in cells.iter().enumerate() {
        let width = widths.get(index).copied().unwrap_or(MAX_CELL_WIDTH);
        let cell = clip(cell, width);
        let _ = write!(line, "{cell:<width$}  ");
    }
    line.trim_end().to_string()
}

fn separator(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ")
}

fn clip(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }

    let mut clipped: String = cell.chars().take(width.saturating_sub(1)).collect();
    clipped.push('~');
    clipped
}

/// Render the filtered glossary: one block per surviving section.
#[must_use]
pub fn glossary(catalog_name: &str, view: &CatalogView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{catalog_name} glossary - {} types found", view.total());

    if view.is_empty() {
        let _ = writeln!(out, "  No types found matching your criteria");
        return out;
    }

    for section in view.sections() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} ({}) - {}",
            section.name,
            section.len(),
            section.description
        );
        for type_def in &section.types {
            let _ = writeln!(
                out,
                "  {:<34} {:<12} {}",
                clip(&type_def.name, 34),
                type_def.category.to_string(),
                clip(&type_def.description, 60)
            );
        }
    }

    out
}

/// Render one type's detail card.
#[must_use]
pub fn type_detail(type_def: &TypeDef) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  [{}]", type_def.name, type_def.category);
    let _ = writeln!(out, "section: {}", type_def.section);
    let _ = writeln!(out, "{}", type_def.description);

    if !type_def.fields.is_empty() {
        let _ = writeln!(out, "fields: {}", type_def.fields.join(", "));
    }

    out
}

/// Render the category/section count summary for one catalog.
#[must_use]
pub fn counts(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} API - {} types", catalog.api, catalog.total());

    for category in TypeCategory::ALL {
        let count = catalog.count_by_category(category);
        if count > 0 {
            let _ = writeln!(out, "  {category:<13} {count}");
        }
    }

    let _ = writeln!(out);
    for section in &catalog.sections {
        let _ = writeln!(out, "  {:<16} {}", section.slug, section.len());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid {
            headers: vec!["Item", "Amount"],
            rows: vec![
                vec!["Painting".into(), "15000".into()],
                vec!["Necklace".into(), "8500".into()],
            ],
            filtered: 2,
            total_pages: 1,
            page: 1,
            showing: Some((1, 2)),
        }
    }

    #[test]
    fn table_renders_header_rows_and_footer() {
        let text = table("Bids", &grid());
        assert!(text.starts_with("Bids\n"));
        assert!(text.contains("Item"));
        assert!(text.contains("Painting"));
        assert!(text.contains("Showing 1 to 2 of 2 results"));
    }

    #[test]
    fn empty_grid_renders_the_empty_state() {
        let empty = Grid {
            headers: vec!["Item"],
            rows: vec![],
            filtered: 0,
            total_pages: 0,
            page: 1,
            showing: None,
        };
        let text = table("Bids", &empty);
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn long_cells_are_clipped_to_the_column_budget() {
        let clipped = clip("a-very-long-title-that-keeps-going-and-going", 12);
        assert_eq!(clipped.chars().count(), 12);
        assert!(clipped.ends_with('~'));
    }
}
