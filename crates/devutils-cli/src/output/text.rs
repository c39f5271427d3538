//! Text and table output formatting for converter state.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use devutils_core::time::{DetailRow, TimeConverter, TimeDetails};
use devutils_core::{BaseField, BaseValues};

use crate::ui::theme::POINTER;
use crate::ui::{badge, hint, kv, print, simple_table, table, Badge, Column, UiContext};

/// Field, human label, and value of every base field in display order.
pub fn base_rows(state: &BaseValues) -> Vec<(BaseField, String, String)> {
    state
        .entries()
        .map(|(field, value)| {
            let label = match field {
                BaseField::Custom => format!("Custom (base {})", state.custom_base),
                _ => field.label().to_string(),
            };
            (field, label, value.to_string())
        })
        .collect()
}

/// Print the five base fields.
///
/// Pretty mode marks `active`, the field the last edit was typed into.
pub fn print_base_values(ctx: &UiContext, state: &BaseValues, active: Option<BaseField>) {
    let rows = base_rows(state);
    if ctx.mode.is_pretty() {
        let marker = POINTER.get(ctx.unicode);
        let table_rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|(field, label, value)| {
                let mark = if Some(field) == active { marker } else { "" };
                vec![mark.to_string(), label, value]
            })
            .collect();
        let columns = [Column::new(""), Column::new("Field"), Column::new("Value")];
        print(ctx, &simple_table(ctx, &columns, &table_rows));
    } else {
        for (field, _, value) in rows {
            print(ctx, &kv(ctx, field.as_str(), &value));
        }
        print(ctx, &kv(ctx, "custom_base", &state.custom_base.to_string()));
    }
}

/// Rows shown below the input: details of the instant, or placeholders.
pub fn time_rows(details: Option<&TimeDetails>, pattern: Option<&str>) -> Vec<DetailRow> {
    let mut rows = match details {
        Some(details) => details.rows(),
        None => TimeDetails::placeholder_rows(),
    };
    if let Some(value) = pattern {
        rows.push(DetailRow {
            key: "pattern",
            label: "Pattern",
            value: value.to_string(),
        });
    }
    rows
}

/// Print the time converter: input line, error, and every derived value.
pub fn print_time_view<Tz>(
    ctx: &UiContext,
    conv: &TimeConverter<Tz>,
    zone: &str,
    now: &DateTime<Utc>,
    pattern: Option<&str>,
) where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let details = conv.details(now);
    let rows = time_rows(details.as_ref(), pattern);
    let format = conv.format();

    if ctx.mode.is_pretty() {
        let input = if conv.input().is_empty() {
            format!("(empty, e.g. {})", conv.placeholder())
        } else {
            conv.input().to_string()
        };
        print(ctx, &kv(ctx, "Input", &input));
        print(
            ctx,
            &kv(ctx, "Format", &format!("{} ({})", format, format.description())),
        );
        print(ctx, &kv(ctx, "Zone", zone));
        if let Some(message) = conv.error() {
            print(ctx, &badge(ctx, Badge::Err, message));
            print(ctx, &hint(ctx, format.hint()));
        }
        let table_rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| vec![row.label.to_string(), row.value])
            .collect();
        let columns = [Column::new("Field"), Column::new("Value")];
        print(ctx, &table(ctx, &columns, &table_rows));
    } else {
        print(ctx, &kv(ctx, "input", conv.input()));
        print(ctx, &kv(ctx, "format", format.as_str()));
        print(ctx, &kv(ctx, "timezone", zone));
        if let Some(message) = conv.error() {
            print(ctx, &kv(ctx, "error", message));
        }
        for row in rows {
            print(ctx, &kv(ctx, row.key, &row.value));
        }
    }
}
