//! # Rendering Module
//!
//! Grid tables and user messages for the terminal.
//!
//! Layout (column widths, alignment, padding) is computed on plain text with
//! Unicode-aware widths; styles are applied to each cell afterwards so escape
//! codes never skew the alignment.

use super::styles::{TableTheme, TABLE_THEME};
use colored::Colorize;
use shoestock::api::{CmdMessage, MessageLevel, ValuedShoe};
use shoestock::model::Shoe;
use unicode_width::UnicodeWidthStr;

const SHOE_HEADERS: [&str; 5] = ["Country", "Code", "Product", "Cost", "Quantity"];
const VALUE_HEADER: &str = "Total Value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Plain,
    Code,
}

struct Cell {
    text: String,
    align: Align,
    kind: CellKind,
}

impl Cell {
    fn left(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Left,
            kind: CellKind::Plain,
        }
    }

    fn right(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Right,
            kind: CellKind::Plain,
        }
    }

    fn code(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Left,
            kind: CellKind::Code,
        }
    }
}

fn shoe_cells(shoe: &Shoe) -> Vec<Cell> {
    vec![
        Cell::left(&shoe.origin),
        Cell::code(&shoe.code),
        Cell::left(&shoe.name),
        Cell::right(format!("{:.2}", shoe.unit_cost)),
        Cell::right(shoe.quantity.to_string()),
    ]
}

/// Renders shoes as a grid with one row per shoe.
pub fn render_shoe_table(shoes: &[Shoe]) -> String {
    render_shoe_table_internal(shoes, console::colors_enabled())
}

fn render_shoe_table_internal(shoes: &[Shoe], use_color: bool) -> String {
    let rows: Vec<Vec<Cell>> = shoes.iter().map(shoe_cells).collect();
    render_grid(&SHOE_HEADERS, &rows, &TABLE_THEME.forced(use_color))
}

/// Renders shoes with an extra "Total Value" column.
pub fn render_value_table(valued: &[ValuedShoe]) -> String {
    render_value_table_internal(valued, console::colors_enabled())
}

fn render_value_table_internal(valued: &[ValuedShoe], use_color: bool) -> String {
    let mut headers = SHOE_HEADERS.to_vec();
    headers.push(VALUE_HEADER);

    let rows: Vec<Vec<Cell>> = valued
        .iter()
        .map(|v| {
            let mut cells = shoe_cells(&v.shoe);
            cells.push(Cell::right(format!("${:.2}", v.total_value)));
            cells
        })
        .collect();

    render_grid(&headers, &rows, &TABLE_THEME.forced(use_color))
}

fn render_grid(headers: &[&str], rows: &[Vec<Cell>], theme: &TableTheme) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(col) {
                *w = (*w).max(cell.text.width());
            }
        }
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&fill.to_string().repeat(w + 2));
            line.push('+');
        }
        theme.border.apply_to(line).to_string()
    };
    let bar = theme.border.apply_to("|").to_string();

    let mut out = String::new();
    out.push_str(&rule('-'));
    out.push('\n');

    out.push_str(&bar);
    for (header, w) in headers.iter().zip(&widths) {
        let padded = pad(header, *w, Align::Left);
        out.push_str(&format!(" {} {}", theme.header.apply_to(padded), bar));
    }
    out.push('\n');
    out.push_str(&rule('='));
    out.push('\n');

    for row in rows {
        out.push_str(&bar);
        for (cell, w) in row.iter().zip(&widths) {
            let padded = pad(&cell.text, *w, cell.align);
            let styled = match cell.kind {
                CellKind::Code => theme.code.apply_to(padded).to_string(),
                CellKind::Plain => padded,
            };
            out.push_str(&format!(" {} {}", styled, bar));
        }
        out.push('\n');
        out.push_str(&rule('-'));
        out.push('\n');
    }

    out
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Shoe> {
        vec![
            Shoe::new("Vietnam", "AB12", "Blazer", 19.99, 3),
            Shoe::new("South Africa", "SKU44386", "Air Max 90", 2300.0, 20),
        ]
    }

    #[test]
    fn grid_has_header_rule_and_row_separators() {
        let output = render_shoe_table_internal(&sample(), false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("+-"));
        assert!(lines[1].contains("Country"));
        assert!(lines[1].contains("Quantity"));
        assert!(lines[2].starts_with("+="));
        assert!(lines[3].contains("AB12"));
        assert!(lines[5].contains("SKU44386"));
        assert!(lines[6].starts_with("+-"));
    }

    #[test]
    fn every_line_has_the_same_width() {
        let output = render_shoe_table_internal(&sample(), false);
        let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn numbers_are_right_aligned_with_two_decimals() {
        let output = render_shoe_table_internal(&sample(), false);
        assert!(output.contains("|   19.99 |"));
        assert!(output.contains("| 2300.00 |"));
        assert!(output.contains("|        3 |"));
    }

    #[test]
    fn wide_characters_keep_alignment() {
        let shoes = vec![Shoe::new("日本", "JP1", "下駄", 10.0, 1)];
        let output = render_shoe_table_internal(&shoes, false);
        let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn value_table_adds_dollar_column() {
        let valued = vec![ValuedShoe {
            shoe: Shoe::new("Vietnam", "AB12", "Blazer", 19.99, 3),
            total_value: 19.99 * 3.0,
        }];
        let output = render_value_table_internal(&valued, false);
        assert!(output.contains("Total Value"));
        assert!(output.contains("$59.97"));
    }

    #[test]
    fn empty_table_is_just_the_header() {
        let output = render_shoe_table_internal(&[], false);
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn forced_color_styles_the_code_cell() {
        let output = render_shoe_table_internal(&sample(), true);
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("AB12"));
    }

    #[test]
    fn messages_keep_their_text() {
        let output = render_messages(&[
            CmdMessage::info("Loaded 4 shoe(s)"),
            CmdMessage::error("Invalid input: cost"),
        ]);
        assert!(output.contains("Loaded 4 shoe(s)"));
        assert!(output.contains("Invalid input: cost"));
        assert_eq!(output.lines().count(), 2);
    }
}
