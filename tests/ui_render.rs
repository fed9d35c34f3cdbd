use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tally::store::{CounterAction, CounterRecord};
use tally::ui::counter::{CounterIntent, CounterReducer, CounterViewState};
use tally::ui::footer::LOCAL_ONLY_TAG;
use tally::ui::mvi::Reducer;
use tally::ui::render::{draw, LOADING_TEXT, OFFLINE_TEXT, PENDING_TEXT};
use time::OffsetDateTime;

fn render(state: &CounterViewState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, state)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer.content.iter().map(|cell| cell.symbol()).collect()
}

fn loading() -> CounterViewState {
    CounterViewState::loading(CounterRecord::placeholder(OffsetDateTime::UNIX_EPOCH))
}

fn online(count: i64) -> CounterViewState {
    CounterReducer::reduce(
        loading(),
        CounterIntent::Loaded(CounterRecord {
            id: 1,
            count,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }),
    )
}

#[test]
fn loading_screen_shows_only_loading_text() {
    let screen = render(&loading());
    assert!(screen.contains(LOADING_TEXT));
    assert!(!screen.contains("Last updated"));
}

#[test]
fn online_screen_shows_count_without_notice() {
    let screen = render(&online(1234));
    assert!(screen.contains("1234"));
    assert!(screen.contains("Last updated: 1970-01-01T00:00:00Z"));
    assert!(screen.contains("online"));
    assert!(!screen.contains(OFFLINE_TEXT));
}

#[test]
fn offline_screen_shows_notice() {
    let state = CounterReducer::reduce(loading(), CounterIntent::LoadFailed);
    let screen = render(&state);
    assert!(screen.contains(OFFLINE_TEXT));
    assert!(screen.contains("offline"));
}

#[test]
fn negative_counts_render() {
    let screen = render(&online(-17));
    assert!(screen.contains("-17"));
}

#[test]
fn pending_shows_updating_text() {
    let state = CounterReducer::reduce(online(1), CounterIntent::Begin(CounterAction::Increment));
    assert!(render(&state).contains(PENDING_TEXT));
    assert!(!render(&online(1)).contains(PENDING_TEXT));
}

#[test]
fn footer_hides_action_hints_while_loading() {
    let screen = render(&loading());
    assert!(screen.contains("q: Quit"));
    assert!(!screen.contains("r: Reset"));
}

#[test]
fn footer_shows_action_hints_when_online() {
    let screen = render(&online(3));
    assert!(screen.contains("r: Reset"));
    assert!(!screen.contains(LOCAL_ONLY_TAG));
}

#[test]
fn footer_tags_offline_session_as_local_only() {
    let state = CounterReducer::reduce(loading(), CounterIntent::LoadFailed);
    let screen = render(&state);
    assert!(screen.contains(LOCAL_ONLY_TAG));
    assert!(screen.contains("r: Reset"));
}
