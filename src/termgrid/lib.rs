//! # Termgrid - Paginated Tables for the Terminal
//!
//! A small engine that turns an arbitrary list of string rows into a
//! fixed-width, paginated, styled text grid sized against the live terminal.
//!
//! ## The Problem
//!
//! Rendering tabular data in a terminal keeps running into the same chores:
//! - Column widths must be distributed over whatever width the terminal
//!   happens to have *right now*, mixing fixed-width columns with
//!   proportional ones
//! - Content rarely fits: cells need alignment, padding, and truncation
//! - Long lists need pagination, and page state needs to survive re-renders
//! - Styling concerns (zebra striping, separators) leak into layout code
//!
//! ## The Solution
//!
//! Termgrid separates concerns:
//! - **Columns** declare a label, a width (absolute cells or a fraction of
//!   the leftover space), and an alignment
//! - **Extents** size the whole grid: absolute, fraction-of-terminal, or
//!   terminal-minus-n
//! - **Layout** resolves everything against a terminal-size query and is
//!   recomputed only when content or dimensions change
//! - **Decoration** is a pluggable hook applied to every emitted fragment;
//!   the default produces zebra rows with underlined separators, and
//!   replacing it never touches layout
//!
//! ## Quick Example
//!
//! ```rust
//! use termgrid::{Align, Column, Extent, Grid};
//!
//! let mut grid = Grid::new(
//!     vec![
//!         Column::fixed("ID", 3),
//!         Column::flex("Name", 1.0).align(Align::Left),
//!     ],
//!     Extent::Cells(32),
//!     Extent::Cells(6),
//! )
//! // Fixed size source so the example runs without a terminal.
//! .with_size_source(|| Some((80, 24)));
//!
//! grid.set_content(vec![
//!     vec!["0".into(), "Buy milk".into()],
//!     vec!["1".into(), "Call mom".into()],
//! ])
//! .unwrap();
//!
//! println!("{}", grid.render());
//! ```
//!
//! ## Sizing Model
//!
//! Every column owns one leading separator cell plus its content cells. For
//! a grid resolved to `width` cells, fixed columns are allotted `w + 1`
//! cells each, and the remaining space
//! `left_space = width - (1 + sum_of_fixed_allotments)` is split among the
//! flex columns, each taking its floored share `fraction * left_space` plus
//! its separator cell. The `1` subtracted up front accounts for the
//! separator that closes the final column.
//!
//! Vertically, one row is reserved for the header, so a grid of resolved
//! height `h` shows `h - 1` content rows per page.
//!
//! ## Terminal Detection
//!
//! The default size source queries stdout via the `console` crate on every
//! layout pass. When the size cannot be determined (piped output, `TERM`
//! unset), layout fails with [`GridError::TerminalUnavailable`]; there is no
//! headless fallback. Embedders and tests inject their own source with
//! [`Grid::with_size_source`].

use console::{Style, Term};
use once_cell::sync::Lazy;
use thiserror::Error;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Error)]
pub enum GridError {
    #[error("cannot determine terminal size (output is not a terminal?)")]
    TerminalUnavailable,
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Default separator glyph: a left one-eighth block, one cell wide.
pub const DEFAULT_SEPARATOR: &str = "▏";

/// Horizontal alignment of cell content within its column.
///
/// [`Align::Center`] is the default for columns that do not specify one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    Right,
    #[default]
    Center,
}

/// Width of a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColWidth {
    /// An absolute number of content cells.
    Fixed(usize),
    /// A fraction of the space left over after fixed columns are allotted.
    Flex(f64),
}

/// A column specification: label, width, alignment.
#[derive(Debug, Clone)]
pub struct Column {
    label: String,
    width: ColWidth,
    align: Align,
}

impl Column {
    /// A column with an absolute content width.
    pub fn fixed(label: impl Into<String>, cells: usize) -> Self {
        Self {
            label: label.into(),
            width: ColWidth::Fixed(cells),
            align: Align::default(),
        }
    }

    /// A column taking a fraction of the leftover width.
    pub fn flex(label: impl Into<String>, fraction: f64) -> Self {
        Self {
            label: label.into(),
            width: ColWidth::Flex(fraction),
            align: Align::default(),
        }
    }

    /// Sets the alignment, returning the column for chaining.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A grid dimension, resolved against the live terminal size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Non-negative: an absolute size. Negative: the terminal size minus
    /// the absolute value (`Cells(-2)` on a 24-row terminal resolves to 22).
    Cells(i64),
    /// A fraction of the terminal size, floored.
    Fraction(f64),
}

impl Extent {
    fn resolve(self, available: usize) -> usize {
        match self {
            Extent::Fraction(f) => (available as f64 * f) as usize,
            Extent::Cells(n) if n < 0 => available.saturating_sub(n.unsigned_abs() as usize),
            Extent::Cells(n) => n as usize,
        }
    }
}

/// Per-fragment decoration hook.
///
/// Receives `(text, row, column, rows_per_page, column_count)` for every
/// fragment the renderer emits and returns the replacement text, usually the
/// input wrapped in styling. `row` 0 is the header. `column` is `None` for a
/// leading separator, `Some(i)` for the content of column `i`, and
/// `Some(column_count)` for the separator that closes the row.
pub type Decorator = Box<dyn Fn(&str, usize, Option<usize>, usize, usize) -> String>;

/// Terminal-size query returning `(width, height)` in cells, `None` when
/// the size cannot be determined.
pub type SizeSource = Box<dyn Fn() -> Option<(u16, u16)>>;

static EVEN_TONE: Lazy<Style> = Lazy::new(|| Style::new().white().bright());
static ODD_TONE: Lazy<Style> = Lazy::new(|| Style::new().blue());

/// The stock decoration: zebra rows, underlined separators.
///
/// Rows alternate between a bright and a blue tone; leading separators are
/// underlined in the row tone, cell content is bold, and the trailing
/// separator is left unstyled. Styles are emitted self-closing, so every row
/// ends reset. Swap in your own hook with [`Grid::with_decorator`].
pub fn default_decorator(
    text: &str,
    row: usize,
    column: Option<usize>,
    _rows: usize,
    columns: usize,
) -> String {
    let tone = if row % 2 == 1 { &*ODD_TONE } else { &*EVEN_TONE };
    match column {
        None => tone.clone().underlined().apply_to(text).to_string(),
        Some(c) if c >= columns => text.to_string(),
        Some(_) => tone.clone().bold().apply_to(text).to_string(),
    }
}

/// Normalizes a row to exactly `columns` fields.
///
/// Extra trailing fields are dropped; missing fields are filled with empty
/// strings. Always returns a fresh vector, never aliasing the input.
pub fn normalize_row(row: &[String], columns: usize) -> Vec<String> {
    let mut out: Vec<String> = row.iter().take(columns).cloned().collect();
    out.resize(columns, String::new());
    out
}

/// A paginated, column-aligned text grid.
///
/// Holds the column specification, target extents, current page, and the
/// last content set. Layout (terminal query, width distribution, page
/// arithmetic) runs on [`Grid::set_content`] and [`Grid::refresh`]; page
/// navigation and [`Grid::render`] never touch the terminal.
pub struct Grid {
    columns: Vec<Column>,
    width: Extent,
    height: Extent,
    sep: String,
    page: usize,
    pages: usize,
    rows: Vec<Vec<String>>,
    /// Per-column allotment in cells, leading separator included.
    sizes: Vec<usize>,
    rows_per_page: usize,
    decorator: Decorator,
    size_source: SizeSource,
}

impl Grid {
    /// Creates a grid. Nothing is laid out until [`Grid::set_content`] or
    /// [`Grid::refresh`] runs.
    pub fn new(columns: Vec<Column>, width: Extent, height: Extent) -> Self {
        Self {
            columns,
            width,
            height,
            sep: DEFAULT_SEPARATOR.to_string(),
            page: 0,
            pages: 1,
            rows: Vec::new(),
            sizes: Vec::new(),
            rows_per_page: 1,
            decorator: Box::new(default_decorator),
            size_source: Box::new(|| {
                Term::stdout().size_checked().map(|(h, w)| (w, h))
            }),
        }
    }

    /// Replaces the separator glyph. It must occupy one terminal cell; the
    /// width math reserves exactly one cell per separator.
    pub fn with_separator(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    /// Replaces the decoration hook. See [`Decorator`] for the contract.
    pub fn with_decorator<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&str, usize, Option<usize>, usize, usize) -> String + 'static,
    {
        self.decorator = Box::new(decorator);
        self
    }

    /// Replaces the terminal-size source. See [`SizeSource`].
    pub fn with_size_source<F>(mut self, source: F) -> Self
    where
        F: Fn() -> Option<(u16, u16)> + 'static,
    {
        self.size_source = Box::new(source);
        self
    }

    /// Replaces the grid content and resets to the first page.
    ///
    /// Rows are normalized to the column count (see [`normalize_row`]) and
    /// layout is recomputed against the current terminal size.
    pub fn set_content(&mut self, rows: Vec<Vec<String>>) -> Result<()> {
        let columns = self.columns.len();
        self.rows = rows.iter().map(|r| normalize_row(r, columns)).collect();
        self.page = 0;
        self.layout()
    }

    /// Recomputes layout against a fresh terminal-size query without
    /// touching content or page position (beyond clamping the page if the
    /// page count shrank).
    pub fn refresh(&mut self) -> Result<()> {
        self.layout()
    }

    fn layout(&mut self) -> Result<()> {
        // One snapshot per pass; a resize mid-render shows up next refresh.
        let (w, h) = (self.size_source)().ok_or(GridError::TerminalUnavailable)?;
        let width = self.width.resolve(w as usize);
        let height = self.height.resolve(h as usize);

        self.rows_per_page = height.saturating_sub(1).max(1);
        self.pages = self.rows.len() / self.rows_per_page + 1;
        if self.page >= self.pages {
            self.page = self.pages - 1;
        }

        let fixed_total: usize = self
            .columns
            .iter()
            .map(|c| match c.width {
                ColWidth::Fixed(n) => n + 1,
                ColWidth::Flex(_) => 0,
            })
            .sum();
        let left_space = width.saturating_sub(1 + fixed_total);

        self.sizes = self
            .columns
            .iter()
            .map(|c| match c.width {
                ColWidth::Fixed(n) => n + 1,
                ColWidth::Flex(f) => (f * left_space as f64) as usize + 1,
            })
            .collect();

        Ok(())
    }

    /// Renders the current page: the header row followed by this page's
    /// slice of content rows. Rows are separated by `\n` with no trailing
    /// newline. Uses the layout from the last [`Grid::set_content`] /
    /// [`Grid::refresh`]; never queries the terminal.
    pub fn render(&self) -> String {
        let start = (self.page * self.rows_per_page).min(self.rows.len());
        let end = ((self.page + 1) * self.rows_per_page).min(self.rows.len());
        let header: Vec<String> = self.columns.iter().map(|c| c.label.clone()).collect();

        let columns = self.sizes.len();
        let mut lines = Vec::with_capacity(1 + end - start);
        for (row, cells) in std::iter::once(&header)
            .chain(self.rows[start..end].iter())
            .enumerate()
        {
            let mut line = String::new();
            for (i, size) in self.sizes.iter().enumerate() {
                let content = fit(&cells[i], size.saturating_sub(1), self.columns[i].align);
                line.push_str(&(self.decorator)(&self.sep, row, None, self.rows_per_page, columns));
                line.push_str(&(self.decorator)(&content, row, Some(i), self.rows_per_page, columns));
            }
            line.push_str(&(self.decorator)(
                &self.sep,
                row,
                Some(columns),
                self.rows_per_page,
                columns,
            ));
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Jumps to a page, clamped into `[0, page_count - 1]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.pages - 1);
    }

    /// Advances one page, wrapping past the last page back to the first.
    pub fn next_page(&mut self) {
        self.page = if self.page + 1 >= self.pages {
            0
        } else {
            self.page + 1
        };
    }

    /// Steps back one page, wrapping before the first page to the last.
    pub fn prev_page(&mut self) {
        self.page = if self.page == 0 {
            self.pages - 1
        } else {
            self.page - 1
        };
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Number of pages, per `rows / rows_per_page + 1`. A row count that is
    /// an exact multiple of the page capacity yields one trailing empty
    /// page; callers paging through content observe it.
    pub fn page_count(&self) -> usize {
        self.pages
    }
}

/// Fits `text` into `width` cells: justified when it fits, truncated (no
/// ellipsis) when it does not. Widths are display widths, not char counts.
fn fit(text: &str, width: usize, align: Align) -> String {
    let text_width = text.width();
    if text_width <= width {
        let deficit = width - text_width;
        return match align {
            Align::Left => format!("{}{}", text, " ".repeat(deficit)),
            Align::Right => format!("{}{}", " ".repeat(deficit), text),
            Align::Center => {
                let left = deficit / 2;
                format!("{}{}{}", " ".repeat(left), text, " ".repeat(deficit - left))
            }
        };
    }

    let mut used = 0;
    let mut out = String::with_capacity(width);
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    // A wide glyph cut at the boundary leaves a one-cell hole; fill it so
    // the column edge stays put.
    out.push_str(&" ".repeat(width - used));
    out
}
