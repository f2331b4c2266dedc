//! Table rendering options, fixed once per process from flags and the terminal.

use std::io::IsTerminal;
use std::sync::OnceLock;

use super::table::TableOptions;
use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// `COLUMNS` below this is ignored; rule tables are unreadable narrower.
const MIN_WIDTH: usize = 40;

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

/// Where stdout goes, as far as the process can tell.
#[derive(Debug, Default)]
struct Terminal {
    is_tty: bool,
    no_color: bool,
    columns: Option<String>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

fn table_options(flags: &GlobalFlags, terminal: &Terminal) -> TableOptions {
    let color = flags.format == OutputFormat::Table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => terminal.is_tty && !terminal.no_color && !flags.quiet,
        };
    let max_width = terminal
        .columns
        .as_deref()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_WIDTH);
    TableOptions { max_width, color }
}

/// Fix table options for the process. Later calls keep the first value.
pub fn init(flags: &GlobalFlags) {
    let _ = TABLE_OPTIONS.set(table_options(flags, &Terminal::detect()));
}

/// Options fixed by [`init`]; plain, unbounded tables before that.
pub fn current() -> TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or_default()
}
