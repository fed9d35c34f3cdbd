use crate::ui::counter::CounterViewState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &CounterViewState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (marker, label, color) = match state {
            CounterViewState::Loading { .. } => ("○", "loading", MUTED_TEXT),
            CounterViewState::Online { .. } => ("●", "online", STATUS_OK),
            CounterViewState::Offline { .. } => ("●", "offline", STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Counter App", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(marker, Style::default().fg(color)),
            Span::styled(" ", text_style),
            Span::styled(label, Style::default().fg(color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
