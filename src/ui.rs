//! The UI engine: group store, rendering, and the interactive loops.
//!
//! One engine instance is constructed at program start and passed by
//! reference to whatever needs it. Every method is synchronous and
//! blocking; the engine is confined to a single thread by construction.
//!
//! Rendering goes through [`Ui::group_lines`], which is effect-free —
//! `show_group` only prints what it returns. The choose loop follows the
//! same split: [`crate::choose::step`] decides, this module redraws and
//! reads.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};

use crate::choose::{Step, step};
use crate::group::{EMPTY_GROUP, Group, GroupBuilder};
use crate::input::{ask, read_signal};
use crate::node::{Callback, NodeContent};
use crate::render;

/// Hint printed under the frame while choosing.
const CHOOSE_HINT: &str = "use keyboard ↑↓ or TAB to choose, Enter to select ...";

/// Prompt used when the caller does not supply one.
const DEFAULT_PROMPT: &str = "-> ";

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Frame width in columns, excluding the trailing border column.
    pub line_characters: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            line_characters: 40,
        }
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// The engine: owns every group and the rendering width.
#[derive(Debug)]
pub struct Ui {
    groups: HashMap<String, Group>,
    config: UiConfig,
}

impl Ui {
    /// Engine with the default 40-column width.
    ///
    /// The reserved [`EMPTY_GROUP`] sentinel is pre-registered with no
    /// body rows.
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    /// Engine with an explicit configuration.
    pub fn with_config(config: UiConfig) -> Self {
        let mut ui = Ui {
            groups: HashMap::new(),
            config,
        };
        ui.set_group(EMPTY_GROUP);
        ui
    }

    /// The configured frame width.
    pub fn width(&self) -> usize {
        self.config.line_characters
    }

    /// Replace/create the group `name` and activate it for building.
    ///
    /// Any prior group under this name is discarded entirely, head
    /// callback included. The returned builder borrows the engine mutably,
    /// so building and rendering cannot interleave.
    pub fn set_group(&mut self, name: impl Into<String>) -> GroupBuilder<'_> {
        let group = self.groups.entry(name.into()).or_default();
        *group = Group::new();
        GroupBuilder::new(group)
    }

    /// Look up a group. Unknown names are a caller contract violation.
    fn group(&self, name: &str) -> &Group {
        self.groups
            .get(name)
            .unwrap_or_else(|| panic!("unknown group: {name:?}"))
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// The lines of the plain rendering, without printing them.
    ///
    /// The [`EMPTY_GROUP`] sentinel with no body rows yields no lines at
    /// all; every other group yields a title, one body line per row, and a
    /// footer.
    pub fn group_lines(&self, name: &str) -> Vec<String> {
        let group = self.group(name);
        if name == EMPTY_GROUP && group.body_len() == 0 {
            return Vec::new();
        }

        let rows: Vec<String> = group.body().iter().map(|node| node.get()).collect();
        render::frame_group(name, &rows, self.config.line_characters)
    }

    /// Render the group to stdout.
    pub fn show_group(&self, name: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        for line in self.group_lines(name) {
            writeln!(stdout, "{line}")?;
        }
        stdout.flush()
    }

    // ------------------------------------------------------------------------
    // Interactive selection
    // ------------------------------------------------------------------------

    /// Keyboard-driven single choice over the group's body rows.
    ///
    /// Requires at least one body row (asserted). Returns the chosen
    /// 1-based row, always within `[1, body_count]`. Body rows re-resolve
    /// on every redraw, so deferred rows stay live while choosing.
    pub fn show_group_and_choose(&self, name: &str) -> io::Result<usize> {
        let group = self.group(name);
        let body_count = group.body_len();
        assert!(
            body_count >= 1,
            "show_group_and_choose on group {name:?} with no body rows"
        );

        let mut cursor = 1;
        loop {
            Self::clear_screen()?;

            let rows: Vec<String> = group.body().iter().map(|node| node.get()).collect();
            let mut stdout = io::stdout();
            for line in render::frame_choices(name, &rows, cursor, self.config.line_characters) {
                writeln!(stdout, "{line}")?;
            }
            writeln!(stdout, "{CHOOSE_HINT}")?;
            stdout.flush()?;

            match step(cursor, body_count, read_signal()?) {
                Step::Pick(row) => return Ok(row),
                Step::MoveTo(row) => cursor = row,
                Step::Ignore => {}
            }
        }
    }

    // ------------------------------------------------------------------------
    // Prompted input
    // ------------------------------------------------------------------------

    /// Render the group, then prompt ("-> ") for a typed value.
    pub fn show_and_get_group<T>(&self, name: &str) -> io::Result<T>
    where
        T: FromStr + Default,
    {
        self.show_and_get_group_with_prompt(name, DEFAULT_PROMPT)
    }

    /// Render the group, then prompt with `prompt` for a typed value.
    ///
    /// A line that fails to parse yields the type's default value.
    pub fn show_and_get_group_with_prompt<T>(&self, name: &str, prompt: &str) -> io::Result<T>
    where
        T: FromStr + Default,
    {
        self.show_group(name)?;
        ask(prompt)
    }

    /// Render and prompt until the value lands in the half-open range
    /// `[range_min, range_max)`.
    ///
    /// The prompt spells out the bound. A failed parse yields the default
    /// value, which is re-prompted like any other out-of-range input.
    pub fn show_and_get_group_in_range<T>(
        &self,
        name: &str,
        range_min: T,
        range_max: T,
    ) -> io::Result<T>
    where
        T: FromStr + Default + PartialOrd + Display,
    {
        let prompt = format!("[{range_min} <= X < {range_max}] ->");
        self.show_and_get_group_with_prompt_in_range(name, &prompt, range_min, range_max)
    }

    /// Range-constrained prompted input with a caller-supplied prompt.
    pub fn show_and_get_group_with_prompt_in_range<T>(
        &self,
        name: &str,
        prompt: &str,
        range_min: T,
        range_max: T,
    ) -> io::Result<T>
    where
        T: FromStr + Default + PartialOrd,
    {
        loop {
            let val: T = self.show_and_get_group_with_prompt(name, prompt)?;
            if range_min <= val && val < range_max {
                return Ok(val);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Auto dispatch
    // ------------------------------------------------------------------------

    /// Run the group the way its head node declares.
    ///
    /// - static-text head: plain render, empty result
    /// - no-arg head: plain render, then the callback's result
    /// - index-arg head: interactive choice, callback applied to the row
    /// - string-arg head: prompted input, callback applied to the value
    pub fn call_group_auto(&self, name: &str) -> io::Result<String> {
        match self.group(name).head().content() {
            NodeContent::Text(_) => {
                self.show_group(name)?;
                Ok(String::new())
            }
            NodeContent::Deferred(Callback::NoArg(f)) => {
                self.show_group(name)?;
                Ok(f())
            }
            NodeContent::Deferred(Callback::IntArg(f)) => {
                let row = self.show_group_and_choose(name)?;
                Ok(f(row))
            }
            NodeContent::Deferred(Callback::StringArg(f)) => {
                let val: String = self.show_and_get_group(name)?;
                Ok(f(&val))
            }
        }
    }

    /// Clear the terminal and home the cursor.
    pub fn clear_screen() -> io::Result<()> {
        execute!(
            io::stdout(),
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }
}

impl Default for Ui {
    fn default() -> Self {
        Ui::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{body_line, footer_line, title_line};

    #[test]
    fn empty_sentinel_is_preregistered_and_renders_nothing() {
        let ui = Ui::new();
        assert!(ui.group_lines(EMPTY_GROUP).is_empty());
    }

    #[test]
    fn empty_sentinel_with_body_rows_renders_normally() {
        let mut ui = Ui::new();
        ui.set_group(EMPTY_GROUP).add("not empty after all");

        let lines = ui.group_lines(EMPTY_GROUP);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], title_line(EMPTY_GROUP, 40));
    }

    #[test]
    fn hello_world_group_renders_title_body_footer() {
        let mut ui = Ui::new();
        ui.set_group("HW").add("Hello").add("world").add("!");

        let lines = ui.group_lines("HW");
        assert_eq!(
            lines,
            vec![
                title_line("HW", 40),
                body_line("Hello", 40),
                body_line("world", 40),
                body_line("!", 40),
                footer_line(40),
            ]
        );
    }

    #[test]
    fn group_without_body_rows_still_renders_title_and_footer() {
        let mut ui = Ui::new();
        ui.set_group("NOTICE");

        let lines = ui.group_lines("NOTICE");
        assert_eq!(lines, vec![title_line("NOTICE", 40), footer_line(40)]);
    }

    #[test]
    fn rendering_the_same_group_twice_is_identical() {
        let mut ui = Ui::new();
        ui.set_group("HW").add("Hello").add("world").add("!");

        assert_eq!(ui.group_lines("HW"), ui.group_lines("HW"));
    }

    #[test]
    fn set_group_discards_the_previous_group_entirely() {
        let mut ui = Ui::new();
        ui.set_group("g")
            .add("old row")
            .then(Callback::no_arg(|| "old head".to_string()));

        ui.set_group("g");

        let lines = ui.group_lines("g");
        assert_eq!(lines.len(), 2); // title + footer, body gone
        assert!(matches!(
            ui.group("g").head().content(),
            NodeContent::Text(_)
        )); // head callback gone
    }

    #[test]
    fn deferred_body_rows_resolve_at_render_time() {
        let mut ui = Ui::new();
        ui.set_group("live")
            .add_fn(Callback::no_arg(|| "computed".to_string()));

        let lines = ui.group_lines("live");
        assert_eq!(lines[1], body_line("computed", 40));
    }

    #[test]
    fn configured_width_is_honored() {
        let mut ui = Ui::with_config(UiConfig {
            line_characters: 20,
        });
        ui.set_group("W").add("row");

        let lines = ui.group_lines("W");
        assert_eq!(ui.width(), 20);
        assert_eq!(lines[0], title_line("W", 20));
        assert_eq!(lines[2], footer_line(20));
        assert_eq!(lines[2].len(), 21);
    }

    #[test]
    fn auto_dispatch_on_text_head_returns_empty() {
        let mut ui = Ui::new();
        ui.set_group("plain").add("just text");

        let result = ui.call_group_auto("plain").unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn auto_dispatch_on_no_arg_head_returns_the_callback_result() {
        let mut ui = Ui::new();
        ui.set_group("auto")
            .add("body")
            .then(Callback::no_arg(|| "ran".to_string()));

        let result = ui.call_group_auto("auto").unwrap();
        assert_eq!(result, "ran");
    }

    #[test]
    #[should_panic(expected = "unknown group")]
    fn rendering_an_unregistered_group_aborts() {
        let ui = Ui::new();
        let _ = ui.group_lines("never set");
    }

    #[test]
    #[should_panic(expected = "no body rows")]
    fn choosing_from_a_bodyless_group_aborts() {
        let mut ui = Ui::new();
        ui.set_group("bare");
        let _ = ui.show_group_and_choose("bare");
    }
}
