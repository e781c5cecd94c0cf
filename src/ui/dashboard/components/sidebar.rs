//! Dashboard sidebar components
//!
//! Quick actions, content status summary, recent activity timeline and reminders

use super::super::utils::{
    ACCENT, LIGHT, MUTED, Target, clip_targets, icon_glyph, line_targets, row_below,
    section_block, tone_color,
};
use crate::commands::Command;
use crate::dataset::{ActivityEntry, ContentStatus, QuickAction, ReminderEntry};

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, Paragraph, Wrap};

pub const QUICK_ACTIONS_TITLE: &str = "◎ Quick Actions";
pub const CONTENT_STATUS_TITLE: &str = "Content Status Summary";

/// One line per quick action; row `i` inside the block is action `i`.
pub fn render_quick_actions(f: &mut Frame, area: Rect, actions: &[QuickAction]) {
    let lines: Vec<ListItem> = actions
        .iter()
        .map(|action| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", icon_glyph(action.icon)),
                    Style::default().fg(ACCENT),
                ),
                Span::styled(
                    action.label.as_str(),
                    Style::default().fg(Color::White),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(lines).block(section_block(QUICK_ACTIONS_TITLE)),
        area,
    );
}

/// Each quick action's whole row is clickable.
pub fn quick_action_targets(area: Rect, actions: &[QuickAction]) -> Vec<Target> {
    let inner = section_block(QUICK_ACTIONS_TITLE).inner(area);
    let targets = (0..actions.len())
        .map(|row| {
            (
                Rect::new(inner.x, row_below(inner.y, row), inner.width, 1),
                Command::QuickAction(row),
            )
        })
        .collect();
    clip_targets(targets, inner)
}

fn manage_link() -> Line<'static> {
    Line::styled(
        "Manage All Content →",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )
}

/// Label and muted sub-label on the left, value right-aligned to `width`.
pub fn content_status_line(status: &ContentStatus, width: usize) -> Line<'_> {
    let mut spans = vec![Span::styled(
        status.label.as_str(),
        Style::default().fg(LIGHT),
    )];
    if let Some(sub) = &status.sub {
        spans.push(Span::styled(format!(" ({})", sub), Style::default().fg(MUTED)));
    }
    let used: usize = spans.iter().map(|s| s.width()).sum::<usize>() + status.value.len();
    spans.push(Span::raw(" ".repeat(width.saturating_sub(used).max(1))));
    spans.push(Span::styled(
        status.value.as_str(),
        Style::default()
            .fg(tone_color(status.tone))
            .add_modifier(Modifier::BOLD),
    ));
    Line::from(spans)
}

pub fn render_content_status(f: &mut Frame, area: Rect, statuses: &[ContentStatus]) {
    let block = section_block(CONTENT_STATUS_TITLE);
    let width = block.inner(area).width as usize;
    let mut lines: Vec<Line> = statuses
        .iter()
        .map(|status| content_status_line(status, width))
        .collect();
    lines.push(Line::raw(""));
    lines.push(manage_link());
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// The "Manage All Content" link, one blank line below the last status.
pub fn content_status_targets(area: Rect, statuses: &[ContentStatus]) -> Vec<Target> {
    let inner = section_block(CONTENT_STATUS_TITLE).inner(area);
    let origin = Position::new(inner.x, row_below(inner.y, statuses.len() + 1));
    let targets = line_targets(&manage_link(), origin, &[Some(Command::ManageAllContent)]);
    clip_targets(targets, inner)
}

/// Timeline rows; every entry but the last carries the connector down to the next.
pub fn activity_rows(entries: &[ActivityEntry]) -> Vec<Text<'_>> {
    let last = entries.len().saturating_sub(1);
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let connector = if i < last { "│ " } else { "  " };
            Text::from(vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(ACCENT)),
                    Span::styled(
                        entry.description.as_str(),
                        Style::default().fg(Color::White),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(connector, Style::default().fg(MUTED)),
                    Span::styled(entry.time.as_str(), Style::default().fg(MUTED)),
                ]),
            ])
        })
        .collect()
}

pub fn render_activity(f: &mut Frame, area: Rect, entries: &[ActivityEntry]) {
    let list = List::new(activity_rows(entries).into_iter().map(ListItem::new))
        .block(section_block("⚡ Recent Activity"));
    f.render_widget(list, area);
}

pub fn render_reminders(f: &mut Frame, area: Rect, reminders: &[ReminderEntry]) {
    let lines: Vec<Line> = reminders
        .iter()
        .map(|reminder| {
            Line::from(vec![
                Span::styled("▌ ", Style::default().fg(ACCENT)),
                Span::styled(reminder.text.as_str(), Style::default().fg(LIGHT)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines)
            .block(section_block("▦ Upcoming Reminders"))
            .wrap(Wrap { trim: true }),
        area,
    );
}
