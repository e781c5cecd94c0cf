//! Most asked questions panel
//!
//! Bars are scaled against the fixed reference maximum, not the largest count shown.

use super::super::utils::{
    ACCENT, ButtonVariant, MUTED, Target, bar_width_percent, button_span, clip_targets,
    gauge_ratio, line_targets, section_block,
};
use crate::commands::Command;
use crate::consts::cli_consts::TOP_ASKED_REFERENCE_MAX;
use crate::dataset::RankedItem;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, Paragraph};
use std::rc::Rc;

pub const TITLE: &str = "▥ Most Asked Questions This Week";

/// Bar width, in percent, for each item.
pub fn top_asked_widths(items: &[RankedItem]) -> Vec<f64> {
    items
        .iter()
        .map(|item| bar_width_percent(item.count, TOP_ASKED_REFERENCE_MAX))
        .collect()
}

fn update_button() -> Line<'static> {
    Line::from(button_span("Update These Policies", ButtonVariant::Dark))
}

/// Label and bar rows per item, a spacer, then the button row.
fn panel_rows(inner: Rect, count: usize) -> Rc<[Rect]> {
    let mut constraints: Vec<Constraint> = (0..count)
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect();
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ]);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner)
}

/// The "Update These Policies" button.
pub fn top_asked_targets(area: Rect, items: &[RankedItem]) -> Vec<Target> {
    let rows = panel_rows(section_block(TITLE).inner(area), items.len());
    let button_row = rows[items.len() * 2 + 1];
    let targets = line_targets(
        &update_button(),
        Position::new(button_row.x, button_row.y),
        &[Some(Command::UpdateThesePolicies)],
    );
    clip_targets(targets, button_row)
}

pub fn render_top_asked_panel(f: &mut Frame, area: Rect, items: &[RankedItem]) {
    let block = section_block(TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = panel_rows(inner, items.len());

    for (i, (item, width)) in items.iter().zip(top_asked_widths(items)).enumerate() {
        let label_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(12)])
            .split(rows[i * 2]);

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{}. {}", i + 1, item.title),
                Style::default().fg(Color::White),
            ))),
            label_row[0],
        );
        f.render_widget(
            Paragraph::new(format!("{} queries", item.count))
                .alignment(Alignment::Right)
                .style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD)),
            label_row[1],
        );

        let bar = LineGauge::default()
            .filled_style(Style::default().fg(ACCENT))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .line_set(symbols::line::THICK)
            .label("")
            .ratio(gauge_ratio(width));
        f.render_widget(bar, rows[i * 2 + 1]);
    }

    let button_row = rows[items.len() * 2 + 1];
    f.render_widget(Paragraph::new(update_button()), button_row);
}
