//! Bottom section components
//!
//! Policy update suggestions, popular topic shares and help resources

use super::super::utils::{
    ACCENT, ButtonVariant, LIGHT, Target, button_span, clip_targets, gauge_ratio, hex_color,
    icon_glyph, line_targets, row_below, section_block,
};
use crate::commands::Command;
use crate::dataset::{ResourceLink, Suggestion, TopicShare};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, Paragraph, Wrap};
use std::rc::Rc;

pub const SUGGESTIONS_TITLE: &str = "✦ Policy Update Suggestions";
pub const TOPICS_TITLE: &str = "↗ Popular Topics";
pub const RESOURCES_TITLE: &str = "Help & Resources";

fn create_button() -> Line<'static> {
    Line::from(button_span("+ Create Policy Update", ButtonVariant::Dark))
}

/// Wrapped suggestions on top, the button pinned to the last row.
fn suggestion_rows(inner: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(inner)
}

pub fn render_suggestions(f: &mut Frame, area: Rect, suggestions: &[Suggestion]) {
    let block = section_block(SUGGESTIONS_TITLE);
    let rows = suggestion_rows(block.inner(area));
    f.render_widget(block, area);

    let lines: Vec<Line> = suggestions
        .iter()
        .map(|suggestion| {
            Line::from(vec![
                Span::styled(
                    "• ",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(suggestion.text.as_str(), Style::default().fg(LIGHT)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[0]);
    f.render_widget(Paragraph::new(create_button()), rows[1]);
}

/// The "Create Policy Update" button.
pub fn suggestion_targets(area: Rect) -> Vec<Target> {
    let button_row = suggestion_rows(section_block(SUGGESTIONS_TITLE).inner(area))[1];
    let targets = line_targets(
        &create_button(),
        Position::new(button_row.x, button_row.y),
        &[Some(Command::CreatePolicyUpdate)],
    );
    clip_targets(targets, button_row)
}

/// Gauge fill for a topic: the supplied percentage as-is, never normalized
/// against the other topics.
pub fn topic_ratio(topic: &TopicShare) -> f64 {
    gauge_ratio(f64::from(topic.percentage))
}

pub fn render_topics(f: &mut Frame, area: Rect, topics: &[TopicShare]) {
    let block = section_block(TOPICS_TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> = topics
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect();
    constraints.push(Constraint::Fill(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, topic) in topics.iter().enumerate() {
        let label_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(5)])
            .split(rows[i * 2]);
        f.render_widget(
            Paragraph::new(topic.label.as_str()).style(Style::default().fg(Color::White)),
            label_row[0],
        );
        f.render_widget(
            Paragraph::new(format!("{}%", topic.percentage))
                .alignment(Alignment::Right)
                .style(Style::default().fg(LIGHT).add_modifier(Modifier::BOLD)),
            label_row[1],
        );

        let bar = LineGauge::default()
            .filled_style(Style::default().fg(hex_color(&topic.color)))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .line_set(symbols::line::THICK)
            .label("")
            .ratio(topic_ratio(topic));
        f.render_widget(bar, rows[i * 2 + 1]);
    }
}

fn resource_line(resource: &ResourceLink) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            format!("{}  ", icon_glyph(resource.icon)),
            Style::default().fg(ACCENT),
        ),
        Span::styled(resource.label.as_str(), Style::default().fg(Color::White)),
    ])
}

pub fn render_resources(f: &mut Frame, area: Rect, resources: &[ResourceLink]) {
    let lines: Vec<Line> = resources.iter().map(resource_line).collect();
    f.render_widget(
        Paragraph::new(lines).block(section_block(RESOURCES_TITLE)),
        area,
    );
}

/// Each resource link is clickable across its icon and label.
pub fn resource_targets(area: Rect, resources: &[ResourceLink]) -> Vec<Target> {
    let inner = section_block(RESOURCES_TITLE).inner(area);
    let targets = resources
        .iter()
        .enumerate()
        .map(|(row, resource)| {
            let width = u16::try_from(resource_line(resource).width()).unwrap_or(u16::MAX);
            (
                Rect::new(inner.x, row_below(inner.y, row), width, 1),
                Command::OpenResource(row),
            )
        })
        .collect();
    clip_targets(targets, inner)
}
