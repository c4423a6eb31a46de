#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;

/// Render an aligned, left-justified table. When the terminal is too narrow
/// the widest column above its minimum is shrunk first.
///
/// Only cells in `colored_columns` are colorized, and only when
/// `options.color` is set.
#[must_use]
pub fn render_table(
    headers: &[&str],
    colored_columns: &[usize],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = join_cells(
        headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&truncate(&header.to_uppercase(), *width), *width)),
    );
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(join_cells(widths.iter().enumerate().map(|(index, width)| {
            let cell = row.get(index).map_or("-", String::as_str);
            let text = pad(&truncate(cell, *width), *width);
            if options.color && colored_columns.contains(&index) {
                colorize(cell, text)
            } else {
                text
            }
        })));
    }
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join("  ").trim_end().to_string()
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
        total -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

/// Color a padded cell by the raw value it shows.
fn colorize(raw: &str, padded: String) -> String {
    let code = match raw {
        "done" | "ok" | "on" => "32",
        "in-progress" | "pending" | "medium" => "33",
        "high" | "failed" | "off" => "31",
        "low" => "2",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
