//! Process-wide display preferences for `--format table` output.
//!
//! Resolved once from the global flags in `main`, then read by the table
//! renderer when it prints topic lists, categories, and validation reports.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// How tables are drawn.
#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    /// Color validation problem codes.
    pub table_color: bool,
    /// Width to fit table columns into, from `COLUMNS` when it is sane.
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Record preferences for this run. Only the first call has an effect.
pub fn init(flags: &GlobalFlags) {
    let table_color = flags.format == OutputFormat::Table
        && wants_color(
            flags.color,
            std::io::stdout().is_terminal() && !flags.quiet,
            std::env::var_os("NO_COLOR").is_some(),
        );

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        term_width: parse_width(std::env::var("COLUMNS").ok().as_deref()),
    });
}

/// `auto` colors only an interactive, non-quiet terminal without `NO_COLOR`.
const fn wants_color(mode: ColorMode, interactive: bool, no_color: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => interactive && !no_color,
    }
}

/// Widths under 40 columns cannot fit a topic row; ignore them.
fn parse_width(columns: Option<&str>) -> Option<usize> {
    columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

/// Current preferences; plain uncolored output before [`init`] runs.
#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
    })
}
