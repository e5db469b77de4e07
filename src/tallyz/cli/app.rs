//! The interactive loop: owns the query state, the grid, and the terminal,
//! and dispatches parsed input to the API facade.
//!
//! Screen layout per frame: row 0 is the prompt line, row 1 the status bar,
//! and the rest belongs to the grid (hence the grid height of terminal
//! minus two). The grid re-queries the terminal size on every frame, so
//! resizes are picked up between inputs.

use console::Term;
use tallyz::api::TallyzApi;
use tallyz::commands::CmdResult;
use tallyz::error::{Result, TallyzError};
use tallyz::search::Query;
use tallyz::store::DataStore;
use termgrid::{Align, Column, Extent, Grid};

use super::commands::{parse, Input, SearchFlag};
use super::render;
use super::styles;

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App<S: DataStore> {
    api: TallyzApi<S>,
    query: Query,
    grid: Grid,
    term: Term,
    message: Option<String>,
}

impl<S: DataStore> App<S> {
    /// The canonical screen: full-width grid two rows short of the
    /// terminal, with the ID / Name / Tally / Tags columns.
    pub fn standard(api: TallyzApi<S>) -> Self {
        let grid = Grid::new(
            vec![
                Column::fixed("ID", 3),
                Column::flex("Name", 0.75).align(Align::Left),
                Column::fixed("Tally", 7),
                Column::flex("Tags", 0.25).align(Align::Left),
            ],
            Extent::Fraction(1.0),
            Extent::Cells(-2),
        );
        Self::new(api, grid)
    }

    pub fn new(api: TallyzApi<S>, grid: Grid) -> Self {
        Self {
            api,
            query: Query::default(),
            grid,
            term: Term::stdout(),
            message: None,
        }
    }

    /// Loads the list and runs the prompt loop until the user quits, then
    /// saves. Fails fast when the terminal size cannot be determined.
    pub fn run(&mut self) -> Result<()> {
        self.api.load()?;
        self.refresh_results()?;

        loop {
            self.draw()?;
            let line = self.term.read_line()?;
            if self.dispatch(parse(&line))? == Flow::Quit {
                break;
            }
        }

        self.api.save()?;
        self.term.clear_screen()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        self.grid.refresh()?;

        self.term.clear_screen()?;
        self.term.write_line("")?; // the prompt reclaims this row below
        self.term.write_line(&render::status_line(
            &self.query,
            self.grid.current_page(),
            self.grid.page_count(),
        ))?;
        self.term.write_str(&self.grid.render())?;

        self.term.move_cursor_to(0, 0)?;
        let message = self.message.take().unwrap_or_default();
        self.term
            .write_str(&format!("{}{}", message, styles::PROMPT.apply_to(">>: ")))?;
        Ok(())
    }

    /// Re-runs the search and hands the result rows to the grid. An invalid
    /// pattern becomes a status message (the previous rows stay up); grid
    /// failures propagate.
    fn refresh_results(&mut self) -> Result<()> {
        match self.api.select(&self.query) {
            Ok(selected) => {
                let rows = selected.iter().map(render::entry_row).collect();
                self.grid.set_content(rows)?;
                Ok(())
            }
            Err(e @ TallyzError::InvalidPattern(_)) => {
                self.message = Some(render::error_line(&e.to_string()));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, input: Input) -> Result<Flow> {
        match input {
            Input::Quit => return Ok(Flow::Quit),

            Input::Page(n) => self.grid.set_page(n.saturating_sub(1)),
            Input::NextPage => self.grid.next_page(),
            Input::PrevPage => self.grid.prev_page(),

            Input::SetSearch(text) => {
                self.query.text = text;
                self.refresh_results()?;
            }
            Input::SetTags(tags) => {
                self.query.tags = tags;
                self.refresh_results()?;
            }
            Input::ClearTags => {
                self.query.tags.clear();
                self.refresh_results()?;
            }
            Input::ToggleFlags(flags) => {
                for flag in flags {
                    match flag {
                        SearchFlag::Explicit => self.query.explicit = !self.query.explicit,
                        SearchFlag::Regex => self.query.regex = !self.query.regex,
                        SearchFlag::Case => {
                            self.query.case_sensitive = !self.query.case_sensitive
                        }
                    }
                }
                self.refresh_results()?;
            }
            Input::ResetFlags => {
                self.query.explicit = false;
                self.query.regex = false;
                self.query.case_sensitive = false;
                self.refresh_results()?;
            }

            Input::Save => {
                if let Err(e) = self.api.save() {
                    self.message =
                        Some(render::error_line(&format!("Cannot save file: {}", e)));
                }
            }
            Input::Reload => match self.api.load() {
                Ok(()) => self.refresh_results()?,
                Err(e) => {
                    self.message =
                        Some(render::error_line(&format!("Cannot open file: {}", e)));
                }
            },

            Input::Add { name, tags } => {
                let result = self.api.add(name, tags);
                self.report(result);
                self.refresh_results()?;
            }
            Input::Edit { index, name, tags } => {
                let result = self.api.edit(index, name, tags);
                self.report(result);
                self.refresh_results()?;
            }
            Input::ToggleDone(index) => {
                let result = self.api.toggle_done(index);
                self.report(result);
                self.refresh_results()?;
            }
            Input::Increment(index) => {
                let result = self.api.increment(index);
                self.report(result);
                self.refresh_results()?;
            }
            Input::Decrement(index) => {
                let result = self.api.decrement(index);
                self.report(result);
                self.refresh_results()?;
            }

            Input::Malformed(text) => self.message = Some(render::error_line(text)),
            Input::Unknown(cmd) => {
                self.message = Some(render::error_line(&format!("Unknown command: {}", cmd)))
            }
        }
        Ok(Flow::Continue)
    }

    /// The last command message (if any) becomes the next prompt's prefix;
    /// command errors show in the error style instead of propagating.
    fn report(&mut self, result: Result<CmdResult>) {
        match result {
            Ok(res) => {
                if let Some(msg) = res.messages.last() {
                    self.message = Some(render::message_line(msg));
                }
            }
            Err(e) => self.message = Some(render::error_line(&e.to_string())),
        }
    }
}
