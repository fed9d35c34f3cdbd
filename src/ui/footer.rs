use crate::ui::counter::CounterViewState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, OFFLINE_NOTICE};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ACTION_HINTS: &str = " +/↑: Increment │ -/↓: Decrement │ r: Reset │ q: Quit";
pub const QUIT_HINT: &str = " q: Quit";
pub const LOCAL_ONLY_TAG: &str = "local only";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for what the view accepts right now, plus the version.
    pub fn widget(&self, state: &CounterViewState, area: Rect) -> Paragraph<'static> {
        let hints = if state.accepts_actions() {
            ACTION_HINTS
        } else {
            QUIT_HINT
        };
        let tag = if state.show_offline_notice() {
            format!("{} │ ", LOCAL_ONLY_TAG)
        } else {
            String::new()
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count; the hints contain box-drawing characters
        let used = hints.chars().count() + tag.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(tag, Style::default().fg(OFFLINE_NOTICE)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
