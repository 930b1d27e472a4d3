//! Messages widget displaying recent round events.

use client_frontend_core::{MessageEntry, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::strings;

/// Render the message log panel.
///
/// `messages` is newest first; the newest entry is drawn at the bottom.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    messages: &[&MessageEntry],
    theme: &T,
) {
    let items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(strings::MESSAGES))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn format_message(entry: &MessageEntry) -> String {
    match entry.round {
        Some(round) => format!("[{round}] {}", entry.text),
        None => entry.text.clone(),
    }
}
