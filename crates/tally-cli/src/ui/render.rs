//! Rendering primitives for CLI output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Tally · command (context)"
/// Plain mode: "tally command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Tally", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("tally {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: badge plus indented key-value pairs
/// Plain mode: `status=ok` plus key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }
    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub right_aligned: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            right_aligned: false,
        }
    }

    /// A column whose cells hug the right edge (IDs, amounts).
    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            right_aligned: true,
        }
    }
}

/// Render a borderless table.
///
/// Pretty mode: dim headers and padded, aligned columns
/// Plain mode: tab-separated values without a header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX));

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for (i, col) in columns.iter().enumerate() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
            if col.right_aligned {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Print a message unless the command is in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_modes() {
        assert_eq!(header(&plain_ctx(), "list", None), "tally list");
        let pretty = header(&pretty_ctx(), "list", Some("Home"));
        assert!(pretty.contains("Tally"));
        assert!(pretty.contains("list (Home)"));
    }

    #[test]
    fn test_kv_modes() {
        assert_eq!(kv(&plain_ctx(), "Ledger Name", "Home"), "ledger_name=Home");
        assert_eq!(kv(&pretty_ctx(), "Name", "Home"), "Name: Home");
    }

    #[test]
    fn test_hint_modes() {
        assert_eq!(hint(&plain_ctx(), "tally list"), "hint=tally list");
        assert_eq!(hint(&pretty_ctx(), "tally list"), "Hint: tally list");
    }

    #[test]
    fn test_receipt_plain() {
        let r = receipt(&plain_ctx(), "Stored", &[("ID", "0"), ("Name", "Rent")]);
        assert_eq!(r, "status=ok\nid=0\nname=Rent");
    }

    #[test]
    fn test_receipt_pretty() {
        let r = receipt(&pretty_ctx(), "Stored", &[("ID", "0")]);
        assert!(r.starts_with("[\u{2713}] Stored"));
        assert!(r.contains("  ID: 0"));
    }

    #[test]
    fn test_simple_table_plain_is_tab_separated() {
        let columns = [Column::right("ID"), Column::new("Name")];
        let rows = vec![
            vec!["0".to_string(), "Salary".to_string()],
            vec!["1".to_string(), "Rent".to_string()],
        ];
        assert_eq!(
            simple_table(&plain_ctx(), &columns, &rows),
            "0\tSalary\n1\tRent"
        );
    }

    #[test]
    fn test_simple_table_pretty_has_headers() {
        let columns = [Column::right("ID"), Column::new("Name")];
        let rows = vec![vec!["0".to_string(), "Salary".to_string()]];
        let t = simple_table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("ID"));
        assert!(t.contains("Name"));
        assert!(t.contains("Salary"));
    }

    #[test]
    fn test_simple_table_pretty_empty_rows() {
        let columns = [Column::new("ID")];
        let t = simple_table(&pretty_ctx(), &columns, &[]);
        assert!(t.contains("ID"));
    }
}
