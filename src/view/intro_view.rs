//! Rendering of the splash sequence.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::intro::{IntroPhase, IntroSequencer};

pub const STATUS_LINE: &str = "> System ready — Press any key to continue";

const BACKDROP: Color = Color::Rgb(17, 24, 39);
const TITLE: Color = Color::Rgb(229, 231, 235);
const GLOW: Color = Color::Rgb(74, 222, 128);
const STATUS: Color = Color::Rgb(34, 197, 94);

/// Scale a green rain color by `opacity` (0 to 1).
fn rain_color(opacity: f32) -> Color {
    let level = |max: f32| (max * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(0, level(255.0), level(70.0))
}

pub fn render_intro(frame: &mut Frame, area: Rect, intro: &IntroSequencer) {
    let phase = intro.phase();
    let background = if phase >= IntroPhase::Backdrop {
        BACKDROP
    } else {
        Color::Black
    };
    frame.render_widget(
        Block::default().style(Style::default().bg(background)),
        area,
    );

    if phase >= IntroPhase::Rain {
        let buffer = frame.buffer_mut();
        for drop in intro.rain().drops() {
            let x = area.x.saturating_add(drop.column.saturating_mul(2));
            let y = area.y.saturating_add(drop.y as u16);
            if x < area.right() && y < area.bottom() {
                buffer[(x, y)]
                    .set_char(drop.glyph)
                    .set_fg(rain_color(drop.opacity));
            }
        }
    }

    if phase < IntroPhase::Typing {
        return;
    }

    let typer = intro.typer();
    let mut title_style = Style::default().fg(TITLE).add_modifier(Modifier::BOLD);
    if phase >= IntroPhase::Glow {
        title_style = title_style.fg(GLOW);
    }

    let mut title = vec![Span::styled(typer.title().to_string(), title_style)];
    let mut subtitle = vec![Span::styled(
        typer.subtitle().to_string(),
        Style::default().fg(TITLE),
    )];
    if phase == IntroPhase::Typing && !typer.is_complete() {
        let cursor = Span::styled("▌", Style::default().fg(GLOW));
        if typer.subtitle().is_empty() {
            title.push(cursor);
        } else {
            subtitle.push(cursor);
        }
    }
    let mut lines = vec![
        Line::from(title).centered(),
        Line::from(subtitle).centered(),
    ];
    if phase >= IntroPhase::Ready {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(STATUS_LINE, Style::default().fg(STATUS))).centered());
    }

    let height = (lines.len() as u16).min(area.height);
    let text_area = Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    );
    frame.render_widget(Paragraph::new(lines), text_area);
}
