//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge, SEPARATOR};

/// Render a header line for a command.
///
/// Pretty mode: "DevUtils · command (context)"
/// Plain and JSON modes: nothing, so plain output stays `key=value` only
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if !ctx.mode.is_pretty() {
        return String::new();
    }
    let title = styled("DevUtils", styles::bold(), ctx.color);
    let sep = SEPARATOR.get(ctx.unicode);
    match context {
        Some(c) => format!("{} {} {} ({})", title, sep, command, c),
        None => format!("{} {} {}", title, sep, command),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

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
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

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

/// Column header for table rendering.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a table using comfy-table for pretty mode.
///
/// Pretty mode: Styled table with borders
/// Plain mode: Space-separated values (no header)
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();

        // Configure table style
        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
        }

        table.set_content_arrangement(ContentArrangement::Dynamic);

        // Set headers
        let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
        table.set_header(headers);

        // Add rows
        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        // Plain mode: space-separated values, no header
        rows.iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a simple table without borders (for field lists).
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        // Set headers with dim styling using comfy-table's built-in styling
        // This ensures proper column width calculation
        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c.header);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        // Add padding between columns
        for i in 0..columns.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2)); // 0 left, 2 right padding
            }
        }

        // Add rows
        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        // Plain mode: space-separated values, no header
        rows.iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout with proper mode handling.
///
/// In JSON mode, this does nothing (JSON output should be handled separately).
/// In other modes, prints the message.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() && !message.is_empty() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            stdin_tty: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            stdin_tty: false,
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    fn field_rows() -> Vec<Vec<String>> {
        vec![
            vec!["binary".to_string(), "2".to_string(), "11111111".to_string()],
            vec!["hex".to_string(), "16".to_string(), "ff".to_string()],
        ]
    }

    #[test]
    fn test_header_pretty() {
        let ctx = pretty_ctx();
        assert_eq!(header(&ctx, "base", None), "DevUtils \u{00B7} base");
        assert_eq!(
            header(&ctx, "base", Some("from hex")),
            "DevUtils \u{00B7} base (from hex)"
        );
    }

    #[test]
    fn test_header_ascii() {
        let mut ctx = pretty_ctx();
        ctx.unicode = false;
        assert_eq!(header(&ctx, "time", None), "DevUtils - time");
    }

    #[test]
    fn test_header_plain_is_empty() {
        assert_eq!(header(&plain_ctx(), "base", None), "");
    }

    #[test]
    fn test_badge_ok() {
        let ctx = plain_ctx();
        let b = badge(&ctx, Badge::Ok, "valid");
        assert_eq!(b, "[OK] valid");
    }

    #[test]
    fn test_kv_pretty() {
        let ctx = pretty_ctx();
        assert_eq!(kv(&ctx, "Unix time", "1704067200"), "Unix time: 1704067200");
    }

    #[test]
    fn test_kv_plain() {
        let ctx = plain_ctx();
        assert_eq!(kv(&ctx, "Custom Base", "32"), "custom_base=32");
    }

    #[test]
    fn test_hint_modes() {
        assert_eq!(hint(&pretty_ctx(), "try this"), "Hint: try this");
        assert_eq!(hint(&plain_ctx(), "try this"), "hint=try this");
    }

    #[test]
    fn test_table_plain() {
        let ctx = plain_ctx();
        let columns = [Column::new("Field"), Column::new("Base"), Column::new("Value")];
        let t = table(&ctx, &columns, &field_rows());
        assert_eq!(t, "binary 2 11111111\nhex 16 ff");
    }

    #[test]
    fn test_table_pretty() {
        let ctx = pretty_ctx();
        let columns = [Column::new("Field"), Column::new("Value")];
        let rows = vec![vec!["Relative".to_string(), "1yr 2mo 3d ago".to_string()]];
        let t = table(&ctx, &columns, &rows);
        assert!(t.contains("Field"));
        assert!(t.contains("Relative"));
        assert!(t.contains("1yr 2mo 3d ago"));
    }

    #[test]
    fn test_table_empty_rows() {
        let ctx = pretty_ctx();
        let columns = [Column::new("Field"), Column::new("Value")];
        let rows: Vec<Vec<String>> = vec![];
        let t = table(&ctx, &columns, &rows);
        assert!(t.contains("Field"));
        assert!(t.contains("Value"));
    }

    #[test]
    fn test_simple_table_pretty() {
        let ctx = pretty_ctx();
        let columns = [Column::new("Field"), Column::new("Base"), Column::new("Value")];
        let t = simple_table(&ctx, &columns, &field_rows());
        let header_line = t.lines().next().unwrap_or_default();
        assert!(header_line.contains("Field") && header_line.contains("Value"));
        assert!(t.contains("11111111"));
        assert!(t.contains("ff"));
    }

    #[test]
    fn test_simple_table_plain() {
        let ctx = plain_ctx();
        let columns = [Column::new("Field"), Column::new("Base"), Column::new("Value")];
        let t = simple_table(&ctx, &columns, &field_rows());
        assert_eq!(t.lines().count(), 2);
    }

    #[test]
    fn test_receipt_pretty() {
        let ctx = pretty_ctx();
        let r = receipt(&ctx, "Wrote config", &[("Path", "/tmp/devutils/config.toml")]);
        assert!(r.contains("[\u{2713}]"));
        assert!(r.contains("Wrote config"));
        assert!(r.contains("  Path: /tmp/devutils/config.toml"));
    }

    #[test]
    fn test_receipt_plain() {
        let ctx = plain_ctx();
        let r = receipt(&ctx, "Wrote config", &[("Path", "/tmp/devutils/config.toml")]);
        assert_eq!(r, "status=ok\npath=/tmp/devutils/config.toml");
    }

    #[test]
    fn test_error_message() {
        let ctx = pretty_ctx();
        let e = error_message(&ctx, "Invalid input", Some("Tips: use + - * /"));
        assert!(e.contains("[\u{2717}] Invalid input"));
        assert!(e.contains("Hint: Tips: use + - * /"));

        let e_plain = error_message(&plain_ctx(), "Invalid input", None);
        assert_eq!(e_plain, "error=Invalid input");
    }
}
