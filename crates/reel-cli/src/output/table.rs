#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;

/// Render an aligned text table. Limit-like values are right-aligned.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.len(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false, 0))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = clip(row.get(index).map_or("-", String::as_str), *width);
                let right = is_limit_value(&cell);
                let (text, escape_len) = if options.color {
                    highlight(&cell)
                } else {
                    (cell, 0)
                };
                pad(&text, *width, right, escape_len)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest columns one char at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Counts and sizes read better right-aligned: `10`, `28`, `No Limit` stays left.
fn is_limit_value(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

fn pad(value: &str, width: usize, right: bool, escape_len: usize) -> String {
    let visible = value.chars().count().saturating_sub(escape_len);
    let fill = " ".repeat(width.saturating_sub(visible));
    if right {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Color classification and provenance values. Returns the text and the
/// number of invisible escape chars added.
fn highlight(value: &str) -> (String, usize) {
    let code = match value {
        "endangered" => "31",
        "invasive" => "33",
        "spot" => "36",
        "true" => "32",
        "false" => "31",
        _ => return (value.to_string(), 0),
    };
    let colored = format!("\u{1b}[{code}m{value}\u{1b}[0m");
    let escape_len = colored.chars().count() - value.chars().count();
    (colored, escape_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align() {
        let rows = vec![
            vec!["Snapper".to_string(), "10".to_string()],
            vec!["Black Bream".to_string(), "2".to_string()],
        ];
        let table = render_rows(&["species", "daily_limit"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
        assert!(lines[3].ends_with(" 2"));
    }

    #[test]
    fn narrow_terminal_clips_wide_cells() {
        let rows = vec![vec!["a".repeat(80), "x".to_string()]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_rows(&["distribution", "source"], &rows, options);
        let body = table.lines().nth(2).unwrap();
        assert!(body.chars().count() <= 40);
        assert!(body.contains('…'));
    }

    #[test]
    fn color_does_not_shift_alignment() {
        let rows = vec![vec!["invasive".to_string(), "European Carp".to_string()]];
        let colored = render_rows(
            &["classification", "species"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let plain = render_rows(&["classification", "species"], &rows, PLAIN);
        let body = colored.lines().nth(2).unwrap();
        assert!(body.contains("\u{1b}[33m"));
        assert_eq!(
            body.replace("\u{1b}[33m", "").replace("\u{1b}[0m", ""),
            plain.lines().nth(2).unwrap()
        );
    }
}
