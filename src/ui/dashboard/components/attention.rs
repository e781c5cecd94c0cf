//! Questions requiring attention panel

use super::super::utils::{
    ButtonVariant, LIGHT, MUTED, Target, button_span, clip_targets, line_targets, row_below,
    section_block,
};
use crate::commands::{Command, Row};
use crate::dataset::AttentionItem;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem};

pub const TITLE: &str = "⚠ Questions Requiring Your Attention";

/// Lines per item; the buttons sit on the last one.
const ROW_HEIGHT: usize = 3;

fn action_line() -> Line<'static> {
    Line::from(vec![
        button_span("Answer", ButtonVariant::Primary),
        Span::raw(" "),
        button_span("Add to FAQ", ButtonVariant::Outline),
        Span::raw(" "),
        button_span("⇗ Forward", ButtonVariant::Outline),
    ])
}

fn action_commands(row: Row) -> [Option<Command>; 5] {
    [
        Some(Command::Answer(row)),
        None,
        Some(Command::AddToFaq(row)),
        None,
        Some(Command::Forward(row)),
    ]
}

/// One row per item, in input order: question, department and age, buttons.
pub fn attention_rows(items: &[AttentionItem]) -> Vec<Text<'_>> {
    items
        .iter()
        .map(|item| {
            Text::from(vec![
                Line::from(Span::styled(
                    item.question.as_str(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", item.department),
                        Style::default().fg(LIGHT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  ◷ {}", item.elapsed), Style::default().fg(MUTED)),
                ]),
                action_line(),
            ])
        })
        .collect()
}

pub fn render_attention_panel(f: &mut Frame, area: Rect, items: &[AttentionItem]) {
    let list =
        List::new(attention_rows(items).into_iter().map(ListItem::new)).block(section_block(TITLE));
    f.render_widget(list, area);
}

/// Answer, Add to FAQ and Forward buttons of every item that fits in `area`.
pub fn attention_targets(area: Rect, items: &[AttentionItem]) -> Vec<Target> {
    let inner = section_block(TITLE).inner(area);
    let line = action_line();
    let targets = (0..items.len())
        .flat_map(|row| {
            let y = row_below(inner.y, row * ROW_HEIGHT + ROW_HEIGHT - 1);
            line_targets(&line, Position::new(inner.x, y), &action_commands(row))
        })
        .collect();
    clip_targets(targets, inner)
}
