//! Recent user feedback panel

use super::super::utils::{
    ACCENT, LIGHT, Target, clip_targets, line_targets, row_below, section_block, star_glyphs,
};
use crate::commands::{Command, Row};
use crate::dataset::FeedbackEntry;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem};

pub const TITLE: &str = "★ Recent User Feedback";

/// Lines per entry; the links sit on the last one.
const ROW_HEIGHT: usize = 3;

fn link_line() -> Line<'static> {
    let link = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled("View Full Feedback", link),
        Span::raw("    "),
        Span::styled("↩ Reply to User", link),
    ])
}

fn link_commands(row: Row) -> [Option<Command>; 3] {
    [
        Some(Command::ViewFullFeedback(row)),
        None,
        Some(Command::ReplyToUser(row)),
    ]
}

pub fn star_line(rating: u8) -> Line<'static> {
    Line::from(
        star_glyphs(rating)
            .into_iter()
            .map(|glyph| Span::styled(glyph.symbol(), Style::default().fg(glyph.color())))
            .collect::<Vec<_>>(),
    )
}

pub fn feedback_rows(entries: &[FeedbackEntry]) -> Vec<Text<'_>> {
    entries
        .iter()
        .map(|entry| {
            Text::from(vec![
                star_line(entry.rating),
                Line::from(Span::styled(
                    format!("\"{}\"", entry.comment),
                    Style::default().fg(LIGHT).add_modifier(Modifier::ITALIC),
                )),
                link_line(),
            ])
        })
        .collect()
}

pub fn render_feedback_panel(f: &mut Frame, area: Rect, entries: &[FeedbackEntry]) {
    let list =
        List::new(feedback_rows(entries).into_iter().map(ListItem::new)).block(section_block(TITLE));
    f.render_widget(list, area);
}

/// View Full Feedback and Reply to User links of every entry that fits in `area`.
pub fn feedback_targets(area: Rect, entries: &[FeedbackEntry]) -> Vec<Target> {
    let inner = section_block(TITLE).inner(area);
    let line = link_line();
    let targets = (0..entries.len())
        .flat_map(|row| {
            let y = row_below(inner.y, row * ROW_HEIGHT + ROW_HEIGHT - 1);
            line_targets(&line, Position::new(inner.x, y), &link_commands(row))
        })
        .collect();
    clip_targets(targets, inner)
}
