use crate::store::CounterRecord;
use crate::ui::counter::CounterViewState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{COUNT_ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, OFFLINE_NOTICE};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use time::format_description::well_known::Rfc3339;

pub const LOADING_TEXT: &str = "Loading counter...";
pub const OFFLINE_TEXT: &str = "Running in offline mode - changes won't persist";
pub const PENDING_TEXT: &str = "Updating counter...";

const CARD_WIDTH: u16 = 56;

pub fn draw(frame: &mut Frame<'_>, state: &CounterViewState) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(state), header);
    frame.render_widget(Clear, body);

    if state.has_loaded() {
        let lines = card_lines(state);
        let height = lines.len() as u16 + 2;
        let card = centered_rect_by_size(CARD_WIDTH, height, body);
        let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(widget, card);
    } else {
        let rect = centered_rect_by_size(CARD_WIDTH, 1, body);
        let widget = Paragraph::new(LOADING_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT));
        frame.render_widget(widget, rect);
    }

    frame.render_widget(Footer::new().widget(state, footer), footer);
}

fn card_lines(state: &CounterViewState) -> Vec<Line<'static>> {
    let mirror = state.mirror();
    let mut lines = Vec::new();

    if state.show_offline_notice() {
        lines.push(Line::from(Span::styled(
            OFFLINE_TEXT,
            Style::default().fg(OFFLINE_NOTICE),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        mirror.count.to_string(),
        Style::default()
            .fg(COUNT_ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("Last updated: {}", format_updated_at(mirror)),
        Style::default().fg(MUTED_TEXT),
    )));
    lines.push(Line::from(""));

    let controls_style = if state.accepts_actions() {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    lines.push(Line::from(Span::styled(
        "[-] -1     [r] Reset     [+] +1",
        controls_style,
    )));

    if state.is_pending() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            PENDING_TEXT,
            Style::default().fg(MUTED_TEXT),
        )));
    }

    lines
}

fn format_updated_at(record: &CounterRecord) -> String {
    record
        .updated_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| record.updated_at.unix_timestamp().to_string())
}
