//! # Rendering Module
//!
//! Turns a [`View`] and command messages into styled terminal text.
//!
//! Width calculations stay in Rust because they need Unicode-aware
//! processing. Templates receive pre-computed strings plus semantic style
//! names and decide nothing but layout.

use super::styles::{names, Theme, TODOZ_THEME};
use super::templates::{LIST_TEMPLATE, MESSAGES_TEMPLATE, TEXT_LIST_TEMPLATE};
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use todoz::commands::{CmdMessage, MessageLevel};
use todoz::view::{Row, View};
use unicode_width::UnicodeWidthStr;

pub const CHECK_DONE: &str = "[x]";
pub const CHECK_OPEN: &str = "[ ]";
pub const EDIT_MARKER: &str = "[~]";
const EMPTY_MESSAGE: &str = "No items yet. Add one with: todoz add <text>";

#[derive(Serialize)]
struct RowLine {
    prefix: String,
    index: String,
    index_style: &'static str,
    check: String,
    check_style: &'static str,
    text: String,
    text_style: &'static str,
    hint: String,
    hint_style: &'static str,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<RowLine>,
    empty: bool,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

fn use_color() -> bool {
    Term::stdout().features().colors_supported()
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    let styles = theme.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

/// Renders the rows of a view, one line per row.
pub fn render_view(view: &View, line_width: usize) -> String {
    render_view_internal(view, line_width, use_color())
}

fn render_view_internal(view: &View, line_width: usize, use_color: bool) -> String {
    let index_width = view.rows.len().to_string().len();

    let rows = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| row_line(row, i + 1, index_width, line_width))
        .collect::<Vec<_>>();

    let data = ListData {
        empty: rows.is_empty(),
        rows,
        empty_message: EMPTY_MESSAGE,
    };

    render_template(LIST_TEMPLATE, &data, &TODOZ_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn row_line(row: &Row, position: usize, index_width: usize, line_width: usize) -> RowLine {
    let index = format!("{:>width$}.", position, width = index_width);
    // prefix (2) + index + space + check (3) + space
    let fixed = 2 + index.width() + 1 + CHECK_OPEN.width() + 1;
    let available = line_width.saturating_sub(fixed);

    match row {
        Row::Display {
            text,
            completed,
            dragging,
            drag_over,
            ..
        } => {
            let text_style = if *dragging {
                names::DRAGGING
            } else if *drag_over {
                names::DROP_TARGET
            } else if *completed {
                names::COMPLETED
            } else {
                names::TEXT
            };
            RowLine {
                prefix: if *dragging { "> " } else { "  " }.to_string(),
                index,
                index_style: names::INDEX,
                check: if *completed { CHECK_DONE } else { CHECK_OPEN }.to_string(),
                check_style: if *completed {
                    names::CHECK_DONE
                } else {
                    names::CHECK_OPEN
                },
                text: truncate_to_width(text, available),
                text_style,
                hint: String::new(),
                hint_style: names::HINT,
            }
        }
        Row::Edit { value, .. } => {
            let hint = format!("(editing: todoz save {} <text>)", position);
            let available = available.saturating_sub(hint.width() + 2);
            RowLine {
                prefix: "  ".to_string(),
                index,
                index_style: names::INDEX,
                check: EDIT_MARKER.to_string(),
                check_style: names::EDITING,
                text: truncate_to_width(value, available),
                text_style: names::EDITING,
                hint,
                hint_style: names::HINT,
            }
        }
    }
}

/// Renders command messages with their level's style.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, use_color())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, &TODOZ_THEME, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render_template(TEXT_LIST_TEMPLATE, &data, &TODOZ_THEME, use_color())
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoz::drag::DragGesture;
    use todoz::model::{Item, ItemId, TodoList};
    use todoz::view::project;

    fn view_of(items: Vec<Item>) -> View {
        project(&TodoList::from_items(items).unwrap(), &DragGesture::Idle)
    }

    #[test]
    fn test_render_empty_view() {
        let output = render_view_internal(&View::default(), 100, false);
        assert_eq!(output.trim(), EMPTY_MESSAGE);
    }

    #[test]
    fn test_render_rows_with_indexes_and_checks() {
        let mut done = Item::new(ItemId(2), "walk dog".into());
        done.completed = true;
        let view = view_of(vec![Item::new(ItemId(1), "buy milk".into()), done]);

        let output = render_view_internal(&view, 100, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines, vec!["  1. [ ] buy milk", "  2. [x] walk dog"]);
    }

    #[test]
    fn test_render_edit_row_shows_hint() {
        let mut editing = Item::new(ItemId(5), "draft".into());
        editing.editing = true;
        let output = render_view_internal(&view_of(vec![editing]), 100, false);
        assert!(output.contains("[~] draft"));
        assert!(output.contains("todoz save 1 <text>"));
    }

    #[test]
    fn test_render_marks_dragged_row() {
        let list = TodoList::from_items(vec![
            Item::new(ItemId(1), "a".into()),
            Item::new(ItemId(2), "b".into()),
        ])
        .unwrap();
        let mut drag = DragGesture::Idle;
        drag.start(&list, ItemId(2));

        let output = render_view_internal(&project(&list, &drag), 100, false);
        assert!(output.lines().any(|l| l.starts_with("> 2. [ ] b")));
    }

    #[test]
    fn test_index_column_is_right_aligned() {
        let items = (1..=10)
            .map(|n| Item::new(ItemId(n), format!("item {}", n)))
            .collect();
        let output = render_view_internal(&view_of(items), 100, false);
        assert!(output.contains("   1. [ ] item 1\n"));
        assert!(output.contains("  10. [ ] item 10\n"));
    }

    #[test]
    fn test_long_text_is_truncated_to_line_width() {
        let long = "x".repeat(200);
        let output = render_view_internal(&view_of(vec![Item::new(ItemId(1), long)]), 40, false);
        let line = output.lines().next().unwrap();
        assert_eq!(line.width(), 40);
        assert!(line.ends_with('…'));
    }

    #[test]
    fn test_render_is_stable_for_same_view() {
        let view = view_of(vec![Item::new(ItemId(1), "same".into())]);
        assert_eq!(
            render_view_internal(&view, 80, false),
            render_view_internal(&view, 80, false)
        );
    }

    #[test]
    fn test_render_messages() {
        assert!(render_messages_internal(&[], false).is_empty());

        let messages = vec![
            CmdMessage::success("Added: x"),
            CmdMessage::info("No item with id 3"),
        ];
        let output = render_messages_internal(&messages, false);
        assert_eq!(output, "Added: x\nNo item with id 3\n");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    }
}
