//! Styles for the todoz CLI.
//!
//! Templates never name colors. They apply semantic style names through the
//! `style` filter (`{{ row.text | style(row.text_style) }}`), and this module
//! maps each name to a `console::Style`. Changing the look of the list means
//! editing this table only.
//!
//! Unknown style names render with a `(!?)` prefix so typos in templates show
//! up instead of silently losing styling.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const INDEX: &str = "index";
    pub const TEXT: &str = "text";
    pub const COMPLETED: &str = "completed";
    pub const CHECK_DONE: &str = "check_done";
    pub const CHECK_OPEN: &str = "check_open";
    pub const EDITING: &str = "editing";
    pub const DRAGGING: &str = "dragging";
    pub const DROP_TARGET: &str = "drop_target";
    pub const HINT: &str = "hint";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style. With `use_color` off the text is returned as-is,
    /// but unknown names are still flagged.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static TODOZ_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::INDEX, Style::new().yellow())
        .add(names::TEXT, Style::new())
        .add(names::COMPLETED, Style::new().dim().strikethrough())
        .add(names::CHECK_DONE, Style::new().green())
        .add(names::CHECK_OPEN, Style::new())
        .add(names::EDITING, Style::new().cyan().italic())
        .add(names::DRAGGING, Style::new().bold().reverse())
        .add(names::DROP_TARGET, Style::new().underlined())
        .add(names::HINT, Style::new().dim().italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
});
