//! Footer widget displaying the key bindings of the game screen.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let text = Line::from(vec![
        Span::raw("[A-Z] Type | "),
        Span::raw("[Backspace] Erase | "),
        Span::raw("[Enter] Check | "),
        Span::raw("[ESC] Give up | "),
        Span::raw("[Ctrl+C] Quit"),
    ]);

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
