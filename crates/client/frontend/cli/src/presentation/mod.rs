//! Terminal rendering: setup, theme, layout, widgets, and the event loop.
pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
