use console::Style;
use once_cell::sync::Lazy;

pub static STATUS: Lazy<Style> = Lazy::new(|| Style::new().white().bright().bold());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().white().bright().bold());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bright());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
