//! Rendering of the simulated terminal panel.

use std::time::Instant;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::console::Console;
use crate::model::history::HistoryEntry;
use crate::view::theme::Theme;

/// Drawn to the left of every output line.
const OUTPUT_BORDER: &str = "▌ ";
const CARET: &str = "█";

/// Split `text` into runs of leading spaces followed by non-space characters.
fn words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut prev_space = true;
    for (i, c) in text.char_indices() {
        let space = c == ' ';
        if space && !prev_space {
            words.push(&text[start..i]);
            start = i;
        }
        prev_space = space;
    }
    if start < text.len() {
        words.push(&text[start..]);
    }
    words
}

/// Split `text` into pieces no wider than `width` columns.
///
/// Breaks at spaces where possible; a word wider than a whole row is broken
/// between grapheme clusters. An empty `text` yields one empty piece so
/// blank output lines keep their row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for word in words(text) {
        let word_width = word.width();
        if used + word_width <= width {
            current.push_str(word);
            used += word_width;
            continue;
        }

        let word = if current.is_empty() {
            word
        } else {
            pieces.push(std::mem::take(&mut current));
            used = 0;
            word.trim_start()
        };

        for grapheme in word.graphemes(true) {
            let w = grapheme.width();
            if used + w > width && !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push_str(grapheme);
            used += w;
        }
    }
    pieces.push(current);
    pieces
}

/// Prefix the first wrapped piece with `first` and the rest with `rest`.
fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    first: Vec<Span<'static>>,
    rest: Vec<Span<'static>>,
    text: &str,
    style: Style,
    width: usize,
) {
    let prefix_width: usize = first.iter().map(Span::width).sum();
    let pieces = wrap_text(text, width.saturating_sub(prefix_width));
    for (i, piece) in pieces.into_iter().enumerate() {
        let mut spans = if i == 0 { first.clone() } else { rest.clone() };
        spans.push(Span::styled(piece, style));
        lines.push(Line::from(spans));
    }
}

/// Lines for one history entry: the prompt line, then the output block.
pub fn entry_lines(
    entry: &HistoryEntry,
    prompt: &str,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(command) = &entry.command {
        let prompt_span = Span::styled(prompt.to_string(), Style::default().fg(theme.prompt));
        let indent = Span::raw(" ".repeat(prompt_span.width()));
        push_wrapped(
            &mut lines,
            vec![prompt_span],
            vec![indent],
            command,
            Style::default().fg(theme.command),
            width,
        );
    }

    if !entry.output.is_empty() {
        let border = Span::styled(OUTPUT_BORDER, Style::default().fg(theme.accent));
        for text in entry.output.split('\n') {
            push_wrapped(
                &mut lines,
                vec![border.clone()],
                vec![border.clone()],
                text,
                Style::default().fg(theme.output),
                width,
            );
        }
    }

    lines.push(Line::default());
    lines
}

fn input_lines(console: &Console, theme: &Theme, width: usize, now: Instant) -> Vec<Line<'static>> {
    let prompt_span = Span::styled(console.prompt().to_string(), Style::default().fg(theme.prompt));
    let indent = Span::raw(" ".repeat(prompt_span.width()));
    let mut lines = Vec::new();
    push_wrapped(
        &mut lines,
        vec![prompt_span],
        vec![indent],
        console.input(),
        Style::default().fg(theme.command),
        width.saturating_sub(1),
    );

    let caret = if console.caret_visible(now) { CARET } else { " " };
    if let Some(last) = lines.last_mut() {
        last.spans
            .push(Span::styled(caret, Style::default().fg(theme.accent)));
    }
    lines
}

/// Draw the terminal panel into `area`.
pub fn render_terminal(frame: &mut Frame, area: Rect, console: &Console, title: &str, now: Instant) {
    let theme = console.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.muted))
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let width = usize::from(inner.width);

    let input = input_lines(console, theme, width, now);
    let input_height = (input.len() as u16).min(inner.height);
    let [history_area, input_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(input_height),
    ])
    .areas(inner);

    if !console.is_clearing() {
        let lines: Vec<Line> = console
            .history()
            .entries()
            .iter()
            .flat_map(|entry| entry_lines(entry, console.prompt(), theme, width))
            .collect();

        let height = usize::from(history_area.height);
        let max_scroll = lines.len().saturating_sub(height);
        let scroll = console.scroll().min(max_scroll);
        let top = max_scroll - scroll;
        let visible: Vec<Line> = lines.into_iter().skip(top).take(height).collect();
        frame.render_widget(Paragraph::new(visible), history_area);
    }

    frame.render_widget(Paragraph::new(input), input_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_text_by_width() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("", 4), vec![""]);
        // Wide characters take two columns
        assert_eq!(wrap_text("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_wrap_text_breaks_at_spaces() {
        assert_eq!(
            wrap_text("hello world foo", 11),
            vec!["hello world", "foo"]
        );
        assert_eq!(wrap_text("ab cdefgh", 4), vec!["ab", "cdef", "gh"]);
        // Leading indentation of a line is kept
        assert_eq!(wrap_text("  • item", 20), vec!["  • item"]);
    }

    #[test]
    fn test_wrap_text_keeps_grapheme_clusters_whole() {
        let waving = "👋🏽";
        let pieces = wrap_text(&format!("ab{waving}"), 3);
        assert_eq!(pieces, vec!["ab".to_string(), waving.to_string()]);

        let accented = "e\u{301}";
        let pieces = wrap_text(&accented.repeat(3), 2);
        assert_eq!(pieces, vec![accented.repeat(2), accented.to_string()]);
    }

    #[test]
    fn test_wrap_text_zero_width_still_progresses() {
        assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_entry_lines_layout() {
        let theme = Theme::default_green();
        let entry = HistoryEntry {
            command: Some("echo hi".to_string()),
            output: "one\ntwo".to_string(),
        };
        let lines = entry_lines(&entry, "u@p:~$ ", &theme, 40);
        let text: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(text, vec!["u@p:~$ echo hi", "▌ one", "▌ two", ""]);
    }

    #[test]
    fn test_welcome_entry_has_no_prompt() {
        let theme = Theme::default_green();
        let entry = HistoryEntry::banner("hello");
        let lines = entry_lines(&entry, "u@p:~$ ", &theme, 40);
        assert_eq!(plain(&lines[0]), "▌ hello");
    }

    #[test]
    fn test_long_output_wraps_under_border() {
        let theme = Theme::default_green();
        let entry = HistoryEntry::banner("abcdefgh");
        let lines = entry_lines(&entry, "$ ", &theme, 6);
        let text: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(text, vec!["▌ abcd", "▌ efgh", ""]);
    }
}
