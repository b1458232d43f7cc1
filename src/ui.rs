//! Rendering for extman's TUI.
//!
//! Full replace-all redraw: every frame recomputes the visible set through
//! [`crate::logic::visible_items`] and redraws from scratch. No incremental
//! reconciliation is attempted at this scale.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::logic::visible_items;
use crate::state::{AppState, Filter};
use crate::theme::palette;

/// Message shown when the visible set is empty: search misses read
/// differently from a genuinely empty collection. Any non-empty query text
/// counts as a search, whitespace included, even though matching itself
/// trims the query.
pub fn empty_message(query: &str) -> &'static str {
    if query.is_empty() {
        "No extensions available."
    } else {
        "No extensions match your search."
    }
}

/// Truncate `s` to at most `max` display columns, appending an ellipsis when
/// anything was cut.
pub fn fit_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Draw one full frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = palette(app.theme_mode);
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Header: title on the left, filter pills and theme label on the right.
    let mut header = vec![Span::styled(
        "Extensions Manager",
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )];
    header.push(Span::raw("   "));
    for filter in Filter::ORDER {
        let on = filter == app.filter;
        header.push(Span::styled(
            format!(" {} ", filter.label()),
            if on {
                Style::default()
                    .fg(th.base)
                    .bg(th.lavender)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.subtext0).bg(th.mantle)
            },
        ));
        header.push(Span::raw(" "));
    }
    header.push(Span::styled(
        format!("({})", app.theme_mode.as_config_key()),
        Style::default().fg(th.overlay1),
    ));
    let header = Paragraph::new(Line::from(header)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    f.render_widget(header, chunks[0]);

    // Search input with a live cursor.
    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        Span::styled(app.query.clone(), Style::default().fg(th.text)),
    ]);
    let input = Paragraph::new(input_line)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled("Search", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(input, chunks[1]);
    let right = chunks[1].x + chunks[1].width.saturating_sub(1);
    let x = std::cmp::min(
        chunks[1].x + 1 + 2 + UnicodeWidthStr::width(app.query.as_str()) as u16,
        right,
    );
    f.set_cursor_position(Position::new(x, chunks[1].y + 1));

    // Extensions list, or the empty-state message.
    let vis = visible_items(&app.items, app.filter, &app.query);
    let list_block = Block::default()
        .title(Span::styled(
            format!("Extensions ({})", vis.len()),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    if vis.is_empty() {
        let msg = Paragraph::new(Span::styled(
            empty_message(&app.query),
            Style::default().fg(th.subtext0),
        ))
        .block(list_block);
        f.render_widget(msg, chunks[2]);
        app.list_state.select(None);
    } else {
        let desc_budget = (chunks[2].width as usize).saturating_sub(30).max(10);
        let rows: Vec<ListItem> = vis
            .iter()
            .map(|it| {
                let (marker, marker_style) = if it.is_active {
                    (" on ", Style::default().fg(th.green).add_modifier(Modifier::BOLD))
                } else {
                    (" off", Style::default().fg(th.red))
                };
                let mut segs = vec![
                    Span::styled(marker.to_string(), marker_style),
                    Span::raw("  "),
                    Span::styled(
                        it.name.clone(),
                        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                    ),
                ];
                if !it.description.is_empty() {
                    segs.push(Span::raw("  - "));
                    segs.push(Span::styled(
                        fit_width(&it.description, desc_budget),
                        Style::default().fg(th.overlay2),
                    ));
                }
                segs.push(Span::raw("  "));
                segs.push(Span::styled(
                    it.logo.clone(),
                    Style::default().fg(th.subtext0),
                ));
                ListItem::new(Line::from(segs))
            })
            .collect();
        let list = List::new(rows)
            .style(Style::default().fg(th.text).bg(th.base))
            .block(list_block)
            .highlight_style(Style::default().fg(th.base).bg(th.lavender))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[2], &mut app.list_state);
    }

    // Footer hints.
    let footer = Line::from(vec![
        Span::styled("Type", Style::default().fg(th.sapphire)),
        Span::styled(" search  ", Style::default().fg(th.subtext0)),
        Span::styled("Tab", Style::default().fg(th.sapphire)),
        Span::styled(" filter  ", Style::default().fg(th.subtext0)),
        Span::styled("Enter", Style::default().fg(th.sapphire)),
        Span::styled(" toggle  ", Style::default().fg(th.subtext0)),
        Span::styled("Del", Style::default().fg(th.red)),
        Span::styled(" remove  ", Style::default().fg(th.subtext0)),
        Span::styled("Ctrl+T", Style::default().fg(th.sapphire)),
        Span::styled(" theme  ", Style::default().fg(th.subtext0)),
        Span::styled("Ctrl+C", Style::default().fg(th.sapphire)),
        Span::styled(" quit", Style::default().fg(th.subtext0)),
    ]);
    f.render_widget(
        Paragraph::new(footer).style(Style::default().bg(th.mantle)),
        chunks[3],
    );
}
