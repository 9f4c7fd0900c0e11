//! Rendering logic for each TUI pane

use crate::engine::engine::{PunchOutcome, BLOCKED_MESSAGE};
use crate::grid::{Coord, GRID_SIZE};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Render the fold history pane: one entry per recorded step
pub fn render_folds_pane(
    frame: &mut Frame,
    area: Rect,
    snapshots: &[Snapshot],
    current: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Folds ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the current step visible
    if current < *scroll_offset {
        *scroll_offset = current;
    } else if current >= *scroll_offset + visible_height {
        *scroll_offset = current + 1 - visible_height;
    }
    if snapshots.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(snapshots.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = snapshots
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|snapshot| {
            let marker = if snapshot.step_index == current {
                "▶ "
            } else {
                "  "
            };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("{:>2}  ", snapshot.step_index),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(snapshot.label.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]);
            if snapshot.step_index == current {
                ListItem::new(line).style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the paper pane: per-cell stack depth, crease marks, punch target
pub fn render_paper_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    punch: Coord,
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" Paper (step {}) ", snapshot.step_index))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        "     1  2  3  4  5  6",
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    for row in 1..=GRID_SIZE {
        let mut spans = vec![Span::styled(
            format!("  {}  ", row),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        for col in 1..=GRID_SIZE {
            let cell = Coord::new(row, col);
            let depth = snapshot.grid.depth(cell);

            let (text, mut style) = if !snapshot.mask.is_valid(cell) && depth == 0 {
                ("x".to_string(), Style::default().fg(DEFAULT_THEME.error))
            } else if !snapshot.mask.is_valid(cell) {
                // Layers can stack on a crease cell, but it can never be punched
                (format!("{}", depth), Style::default().fg(DEFAULT_THEME.error))
            } else if depth == 0 {
                ("·".to_string(), Style::default().fg(DEFAULT_THEME.comment))
            } else if depth == 1 {
                ("1".to_string(), Style::default().fg(DEFAULT_THEME.fg))
            } else {
                (
                    format!("{}", depth),
                    Style::default()
                        .fg(DEFAULT_THEME.number)
                        .add_modifier(Modifier::BOLD),
                )
            };

            if cell == punch {
                style = style.bg(DEFAULT_THEME.current_line_bg);
            }
            spans.push(Span::styled(format!("{:>2} ", text), style));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  · ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::raw("empty   "),
        Span::styled("n ", Style::default().fg(DEFAULT_THEME.number)),
        Span::raw("layers   "),
        Span::styled("x ", Style::default().fg(DEFAULT_THEME.error)),
        Span::raw("crease   "),
        Span::styled("▒ ", Style::default().bg(DEFAULT_THEME.current_line_bg)),
        Span::raw("punch target"),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the punch result pane: the unfolded hole pattern
pub fn render_punch_pane(
    frame: &mut Frame,
    area: Rect,
    punch: Coord,
    outcome: &PunchOutcome,
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" Punch at {} ", punch))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = match outcome {
        PunchOutcome::Blocked => vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("  {}", BLOCKED_MESSAGE),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                "  The punch target lies on a diagonal crease.",
                Style::default().fg(DEFAULT_THEME.comment),
            )),
        ],
        PunchOutcome::Holes(result) => {
            let mut lines = Vec::new();
            for row in 1..=GRID_SIZE {
                let mut spans = vec![Span::raw("  ")];
                for col in 1..=GRID_SIZE {
                    if result.is_punched(Coord::new(row, col)) {
                        spans.push(Span::styled(
                            "● ",
                            Style::default()
                                .fg(DEFAULT_THEME.success)
                                .add_modifier(Modifier::BOLD),
                        ));
                    } else {
                        spans.push(Span::styled(
                            "· ",
                            Style::default().fg(DEFAULT_THEME.comment),
                        ));
                    }
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("  {} hole(s) once unfolded", result.hole_count()),
                Style::default().fg(DEFAULT_THEME.primary),
            )));
            lines
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the one-line status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_message: &str,
    position: usize,
    total: usize,
    is_playing: bool,
) {
    let play_indicator = if is_playing { "▶ playing" } else { "⏸ paused" };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", status_message),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("step {}/{} ", position + 1, total),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{} ", play_indicator),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            "q quit · ←/→ step · space play · enter end · backspace start",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}
