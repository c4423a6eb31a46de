use jarvis_core::entities::{ChatMessage, Task};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A record that knows its own table layout.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;

    /// Columns holding status-like values that may be colorized.
    fn colored_columns() -> &'static [usize] {
        &[]
    }
}

impl<T: Tabular> Tabular for &T {
    fn headers() -> &'static [&'static str] {
        T::headers()
    }

    fn colored_columns() -> &'static [usize] {
        T::colored_columns()
    }

    fn row(&self) -> Vec<String> {
        (*self).row()
    }
}

impl Tabular for Task {
    fn headers() -> &'static [&'static str] {
        &["id", "status", "priority", "due", "task"]
    }

    fn colored_columns() -> &'static [usize] {
        &[1, 2]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.status.to_string(),
            self.priority.to_string(),
            self.due_date.clone().unwrap_or_else(|| "-".into()),
            self.display_text().to_string(),
        ]
    }
}

impl Tabular for ChatMessage {
    fn headers() -> &'static [&'static str] {
        &["time", "from", "message"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.sender.to_string(),
            self.text.clone(),
        ]
    }
}

/// Render a list of records in the requested format.
pub fn render_rows<T: Serialize + Tabular>(
    items: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Raw => Ok(serde_json::to_string(items)?),
        OutputFormat::Table if items.is_empty() => Ok(String::from("(no rows)")),
        OutputFormat::Table => {
            let rows = items.iter().map(Tabular::row).collect::<Vec<_>>();
            Ok(table::render_table(
                T::headers(),
                T::colored_columns(),
                &rows,
                table_options(),
            ))
        }
    }
}

/// Render one record; tables show it as key/value pairs sorted by key.
pub fn render_record<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let rows = match serde_json::to_value(value)? {
                Value::Object(map) => map
                    .into_iter()
                    .filter(|(_, value)| !value.is_object())
                    .map(|(key, value)| vec![key, value_to_cell(&value)])
                    .collect(),
                scalar => vec![vec![String::from("value"), value_to_cell(&scalar)]],
            };
            Ok(table::render_table(&["key", "value"], &[], &rows, table_options()))
        }
    }
}

pub fn output_rows<T: Serialize + Tabular>(items: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_rows(items, format)?);
    Ok(())
}

pub fn output_record<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_record(value, format)?);
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
