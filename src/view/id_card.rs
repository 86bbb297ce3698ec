//! The swinging ID card hanging next to the terminal.
//!
//! A terminal cannot rotate text, so the pendulum pose is shown as a
//! sideways displacement of the card and its lanyard, plus a drop shadow on
//! the opposite side.

use rand::Rng;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::Profile;
use crate::model::physics::CardPose;
use crate::view::theme::Theme;

const BARCODE_BARS: usize = 20;
const BAR_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 12;
const LANYARD_LENGTH: u16 = 4;

/// Columns of displacement at one radian of swing.
const SWING_CELLS: f64 = 14.0;

const CARD_FACE: Color = Color::Rgb(245, 245, 245);
const CARD_INK: Color = Color::Rgb(31, 41, 55);

/// Static content of the card.
#[derive(Debug, Clone)]
pub struct IdCard {
    name: String,
    title: String,
    department: String,
    enrollment: String,
    signature: String,
    /// Bar heights in percent, 20 to 100
    barcode: Vec<u8>,
}

impl IdCard {
    pub fn new<R: Rng + ?Sized>(profile: &Profile, rng: &mut R) -> Self {
        Self {
            name: profile.name.clone(),
            title: profile.card_title.clone(),
            department: profile.department.clone(),
            enrollment: profile.enrollment.clone(),
            signature: profile.signature.clone(),
            barcode: (0..BARCODE_BARS)
                .map(|_| rng.random_range(20..=100))
                .collect(),
        }
    }

    pub fn barcode(&self) -> &[u8] {
        &self.barcode
    }

    /// The barcode as a row of block glyphs.
    pub fn barcode_glyphs(&self) -> String {
        self.barcode
            .iter()
            .map(|&height| {
                let level = usize::from(height.clamp(20, 100) - 20) * (BAR_GLYPHS.len() - 1) / 80;
                BAR_GLYPHS[level]
            })
            .collect()
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let ink = Style::default().fg(CARD_INK);
        vec![
            Line::from(Span::styled("◯", Style::default().fg(Color::Blue))).centered(),
            Line::from(Span::styled(
                self.name.clone(),
                ink.add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(self.title.clone(), ink)).centered(),
            Line::default(),
            Line::from(Span::styled(self.department.clone(), ink)).centered(),
            Line::from(Span::styled(
                format!("EnrollMent_No : {}", self.enrollment),
                ink,
            ))
            .centered(),
            Line::default(),
            Line::from(Span::styled(self.barcode_glyphs(), ink)).centered(),
            Line::from(vec![
                Span::styled(" Signature: ", ink),
                Span::styled(
                    self.signature.clone(),
                    ink.add_modifier(Modifier::ITALIC | Modifier::UNDERLINED),
                ),
            ]),
        ]
    }
}

/// Where the card ended up on screen, for hit testing clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardLayout {
    pub card_area: Rect,
}

impl CardLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        let area = self.card_area;
        x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
    }
}

/// Horizontal displacement of the card, in columns.
pub fn swing_offset(pose: &CardPose) -> i32 {
    (pose.rotation_deg.to_radians().sin() * SWING_CELLS).round() as i32
}

fn shift(x: u16, by: i32, min: u16, max: u16) -> u16 {
    (i32::from(x) + by).clamp(i32::from(min), i32::from(max)) as u16
}

/// Draw the lanyard and the card, displaced by `pose`.
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    card: &IdCard,
    pose: &CardPose,
    theme: &Theme,
) -> CardLayout {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height.saturating_sub(LANYARD_LENGTH));
    if width < 4 || height < 3 {
        return CardLayout::default();
    }

    let anchor_x = area.x + area.width / 2;
    let offset = swing_offset(pose);
    let home_x = area.x + (area.width - width) / 2;
    let card_x = shift(home_x, offset, area.x, area.x + area.width - width);
    let card_y = area.y + LANYARD_LENGTH;
    let card_area = Rect::new(card_x, card_y, width, height);

    // Lanyard from the anchor to the top of the displaced card
    let lanyard_style = Style::default().fg(theme.muted);
    let glyph = match offset.signum() {
        1 => "╲",
        -1 => "╱",
        _ => "│",
    };
    frame.render_widget(
        Paragraph::new(Span::styled("●", lanyard_style)),
        Rect::new(anchor_x, area.y, 1, 1),
    );
    for row in 1..LANYARD_LENGTH {
        let x = shift(
            anchor_x,
            offset * i32::from(row) / i32::from(LANYARD_LENGTH),
            area.x,
            area.x + area.width - 1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(glyph, lanyard_style)),
            Rect::new(x, area.y + row, 1, 1),
        );
    }

    // Drop shadow opposite to the swing, softer the further it swings
    let shadow_dx = (pose.shadow_offset / 4.0).round() as i32 + 1;
    let shadow_x = shift(card_x, shadow_dx, area.x, area.x + area.width - width);
    let shadow_height = height.min(area.y + area.height - card_y - 1);
    if shadow_x != card_x && shadow_height > 0 {
        let shade = if pose.shadow_blur > 15.0 { "░" } else { "▒" };
        let shadow_area = Rect::new(shadow_x, card_y + 1, width, shadow_height);
        let fill: Vec<Line> = (0..shadow_height)
            .map(|_| Line::from(shade.repeat(usize::from(width))))
            .collect();
        frame.render_widget(
            Paragraph::new(fill).style(Style::default().fg(theme.muted)),
            shadow_area,
        );
    }

    frame.render_widget(Clear, card_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(CARD_FACE));
    frame.render_widget(
        Paragraph::new(card.lines())
            .block(block)
            .wrap(Wrap { trim: true }),
        card_area,
    );

    CardLayout { card_area }
}
