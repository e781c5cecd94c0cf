//! Dashboard hero metric cards
//!
//! One card per metric, laid out in a single row

use super::super::utils::{
    ACCENT, DANGER, MUTED, SUCCESS, Target, clip_targets, line_targets, section_block,
};
use crate::commands::Command;
use crate::dataset::{Annotation, Metric};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::rc::Rc;

/// Card body: the value, then its annotation.
pub fn metric_lines(metric: &Metric) -> Vec<Line<'_>> {
    let value = Line::from(Span::styled(
        metric.value.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    let annotation = match &metric.annotation {
        Annotation::Trend(text) => Line::from(vec![
            Span::styled("↗ ", Style::default().fg(SUCCESS)),
            Span::styled(text.as_str(), Style::default().fg(SUCCESS)),
        ]),
        Annotation::Badge(text) => Line::from(Span::styled(
            format!(" {} ", text),
            Style::default()
                .fg(Color::White)
                .bg(DANGER)
                .add_modifier(Modifier::BOLD),
        )),
        Annotation::Link(text) => Line::from(Span::styled(
            format!("{} →", text),
            Style::default().fg(ACCENT),
        )),
        Annotation::Note(text) => Line::from(Span::styled(
            text.as_str(),
            Style::default().fg(MUTED),
        )),
    };
    vec![value, annotation]
}

fn card_areas(area: Rect, count: usize) -> Rc<[Rect]> {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
}

/// Link annotations open the feedback queue.
pub fn metric_targets(area: Rect, metrics: &[Metric]) -> Vec<Target> {
    if metrics.is_empty() {
        return Vec::new();
    }
    metrics
        .iter()
        .zip(card_areas(area, metrics.len()).iter())
        .filter(|(metric, _)| matches!(metric.annotation, Annotation::Link(_)))
        .flat_map(|(metric, card)| {
            let inner = section_block("").inner(*card);
            let lines = metric_lines(metric);
            let origin = Position::new(inner.x, inner.y.saturating_add(1));
            clip_targets(
                line_targets(&lines[1], origin, &[Some(Command::ViewFeedbackQueue)]),
                inner,
            )
        })
        .collect()
}

/// Render the metric cards row.
pub fn render_metric_cards(f: &mut Frame, area: Rect, metrics: &[Metric]) {
    if metrics.is_empty() {
        return;
    }

    let chunks = card_areas(area, metrics.len());

    for (metric, chunk) in metrics.iter().zip(chunks.iter()) {
        let title = metric.label.to_uppercase();
        let card = Paragraph::new(metric_lines(metric)).block(section_block(&title));
        f.render_widget(card, *chunk);
    }
}
