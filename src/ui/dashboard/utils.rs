//! Dashboard utility functions
//!
//! Contains the color tokens and helpers shared across dashboard components

use crate::commands::Command;
use crate::consts::cli_consts::STAR_SLOTS;
use crate::dataset::{Icon, Tone};
use ratatui::layout::{Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding};
use std::str::FromStr;

pub const NAVY: Color = Color::Rgb(0x00, 0x22, 0x44);
pub const BLUE: Color = Color::Rgb(0x33, 0x66, 0x99);
pub const ACCENT: Color = Color::Rgb(0x4A, 0x90, 0xD9);
pub const LIGHT: Color = Color::Rgb(0xE8, 0xF0, 0xFE);
pub const MUTED: Color = Color::Rgb(0x6B, 0x72, 0x80);
pub const STAR: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
pub const DANGER: Color = Color::Rgb(0xDC, 0x26, 0x26);
pub const SUCCESS: Color = Color::Rgb(0x05, 0x96, 0x69);
pub const WARNING: Color = Color::Rgb(0xD9, 0x77, 0x06);

/// Width of a count bar in percent of `reference_max`.
///
/// The reference is whatever the caller passes, not the maximum of the displayed
/// set, so a count above it yields more than 100.
pub fn bar_width_percent(count: u32, reference_max: u32) -> f64 {
    if reference_max == 0 {
        return 0.0;
    }
    f64::from(count) / f64::from(reference_max) * 100.0
}

/// Converts a percentage into a gauge ratio in `0.0..=1.0`.
pub fn gauge_ratio(percent: f64) -> f64 {
    (percent / 100.0).clamp(0.0, 1.0)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StarGlyph {
    Filled,
    Empty,
}

impl StarGlyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            StarGlyph::Filled => "★",
            StarGlyph::Empty => "☆",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            StarGlyph::Filled => STAR,
            StarGlyph::Empty => MUTED,
        }
    }
}

/// Left-to-right star glyphs for a rating. Ratings above the slot count clamp.
pub fn star_glyphs(rating: u8) -> Vec<StarGlyph> {
    (0..STAR_SLOTS)
        .map(|slot| {
            if slot < rating {
                StarGlyph::Filled
            } else {
                StarGlyph::Empty
            }
        })
        .collect()
}

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::FileText => "▤",
        Icon::MessageSquare => "✉",
        Icon::Upload => "⇪",
        Icon::Send => "➤",
        Icon::BookOpen => "☰",
        Icon::Video => "▶",
        Icon::Phone => "☎",
        Icon::Mail => "✎",
    }
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => LIGHT,
        Tone::Pending => WARNING,
        Tone::Critical => DANGER,
        Tone::Positive => SUCCESS,
    }
}

/// Parses `#RRGGBB`, falling back to gray for anything else.
pub fn hex_color(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(Color::Gray)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Dark,
}

/// Inert button rendered as a bracketed label.
pub fn button_span(label: &str, variant: ButtonVariant) -> Span<'static> {
    let style = match variant {
        ButtonVariant::Primary => Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        ButtonVariant::Outline => Style::default().fg(LIGHT),
        ButtonVariant::Dark => Style::default()
            .fg(Color::White)
            .bg(NAVY)
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(format!("[ {} ]", label), style)
}

/// Rounded, titled panel used by every dashboard card.
pub fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED))
        .padding(Padding::horizontal(1))
}

/// A clickable cell range and the command it dispatches.
pub type Target = (Rect, Command);

/// Row `offset` lines below `top`.
pub fn row_below(top: u16, offset: usize) -> u16 {
    top.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
}

/// Lays the spans of `line` out left to right from `origin`, pairing span `i`
/// with `commands[i]`. Spans without a command are skipped.
pub fn line_targets(line: &Line, origin: Position, commands: &[Option<Command>]) -> Vec<Target> {
    let mut x = origin.x;
    let mut targets = Vec::new();
    for (span, command) in line.spans.iter().zip(commands) {
        let width = u16::try_from(span.width()).unwrap_or(u16::MAX);
        if let Some(command) = command {
            targets.push((Rect::new(x, origin.y, width, 1), *command));
        }
        x = x.saturating_add(width);
    }
    targets
}

/// Cuts targets down to `bounds`, dropping any that end up empty.
pub fn clip_targets(targets: Vec<Target>, bounds: Rect) -> Vec<Target> {
    targets
        .into_iter()
        .map(|(rect, command)| (rect.intersection(bounds), command))
        .filter(|(rect, _)| !rect.is_empty())
        .collect()
}
