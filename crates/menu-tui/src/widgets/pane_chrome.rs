//! PaneChrome: bordered pane around the menu with a breadcrumb title.

use crate::theme::{style_border, C_BREADCRUMB, C_PRIMARY};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// A badge shown in the top-right of the pane header (e.g. "EDIT").
pub struct Badge<'a> {
    pub text: &'a str,
    pub color: Color,
}

/// Block for the menu pane. Every breadcrumb segment but the last is dimmed.
pub fn pane_chrome<'a>(breadcrumb: &'a str, badge: Option<Badge<'a>>) -> Block<'a> {
    let mut title_spans = vec![Span::raw(" ")];
    let mut segments = breadcrumb.rsplitn(2, " › ");
    let last = segments.next().unwrap_or_default();
    if let Some(parents) = segments.next() {
        title_spans.push(Span::styled(
            format!("{parents} › "),
            Style::default().fg(C_BREADCRUMB),
        ));
    }
    title_spans.push(Span::styled(
        last,
        Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
    ));
    title_spans.push(Span::raw(" "));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style_border())
        .title(Line::from(title_spans));

    if let Some(b) = badge {
        block.title_top(
            Line::from(Span::styled(
                format!(" {} ", b.text),
                Style::default().fg(b.color).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        )
    } else {
        block
    }
}
