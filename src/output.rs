//! Terminal reporting for the colorcraft CLI.
//!
//! Progress goes to stderr as `verb message` lines with the verb right-aligned
//! in a fixed column. Stdout only ever carries palettes, CSS and completion
//! scripts so it can be piped.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::types::{Colour, Resolution};

const RESET: &str = "\x1b[0m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

/// Colour of a report line's verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Work in progress or finished successfully
    Good,
    /// Headings and hints
    Info,
    Warn,
    Fail,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Good => "\x1b[1;32m",
            Tone::Info => "\x1b[1;36m",
            Tone::Warn => "\x1b[1;33m",
            Tone::Fail => "\x1b[1;31m",
        }
    }
}

/// Inline text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Bold,
    Dim,
    Path,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Bold => "\x1b[1m",
            Style::Dim => "\x1b[2m",
            Style::Path => "\x1b[36m",
        }
    }
}

/// Writes status lines to stderr, with ANSI colour when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Always plain text, whatever stderr is.
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn report(&self, tone: Tone, verb: &str, message: &str) {
        let line = self.format_line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }

    pub fn status(&self, verb: &str, message: &str) {
        self.report(Tone::Good, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.report(Tone::Info, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.report(Tone::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.report(Tone::Fail, verb, message);
    }

    /// `   Rendering <subject> (<resolution>, seed <seed>)`
    pub fn rendering(&self, subject: &str, resolution: Resolution, seed: Option<u32>) {
        self.status("Rendering", &render_summary(subject, resolution, seed));
    }

    /// `    Finished wrote <path>`
    pub fn wrote(&self, path: &Path) {
        let shown = self.path(path);
        self.status("Finished", &format!("wrote {}", shown));
    }

    /// A row of colour blocks followed by a newline; prints nothing without colour.
    pub fn swatches(&self, colours: &[Colour]) {
        if !self.color || colours.is_empty() {
            return;
        }
        let row: String = colours.iter().map(|c| self.swatch(*c)).collect();
        let _ = writeln!(io::stderr().lock(), "{}", row);
    }

    pub fn bold(&self, text: &str) -> String {
        self.styled(Style::Bold, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.styled(Style::Dim, text)
    }

    /// A path relative to the working directory when possible.
    pub fn path(&self, path: &Path) -> String {
        self.styled(Style::Path, &display_path(path))
    }

    /// Diagnostic label: red for errors, yellow for warnings.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let tone = if is_error { Tone::Fail } else { Tone::Warn };
        if self.color {
            format!("{}{label}{RESET}", tone.ansi())
        } else {
            label.to_string()
        }
    }

    fn swatch(&self, colour: Colour) -> String {
        if self.color {
            format!("\x1b[48;2;{};{};{}m  {RESET}", colour.r, colour.g, colour.b)
        } else {
            "  ".to_string()
        }
    }

    fn styled(&self, style: Style, text: &str) -> String {
        if self.color {
            format!("{}{text}{RESET}", style.ansi())
        } else {
            text.to_string()
        }
    }

    fn format_line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.color {
            format!("{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }
}

/// `subject (1920x1080, seed 42)`, or without the seed for deterministic renders.
pub fn render_summary(subject: &str, resolution: Resolution, seed: Option<u32>) -> String {
    match seed {
        Some(seed) => format!("{} ({}, seed {})", subject, resolution, seed),
        None => format!("{} ({})", subject, resolution),
    }
}

/// `plural(1, "image", "images")` is "1 image".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let word = if n == 1 { singular } else { pluralized };
    format!("{} {}", n, word)
}

/// `path` relative to the working directory, or as given when outside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));
    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
