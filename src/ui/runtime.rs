use crate::client::CounterRemote;
use crate::ui::counter::CounterView;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{map_key, KeyCommand};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the counter screen until the user quits.
pub async fn run<R: CounterRemote>(remote: R) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(POLL_INTERVAL);
    let mut view = CounterView::new(remote);

    terminal.draw(|frame| draw(frame, view.state()))?;
    view.mount().await;

    // Controls are hidden while loading.
    if quit_requested(events.drain()) {
        drop(guard);
        return Ok(());
    }

    loop {
        terminal.draw(|frame| draw(frame, view.state()))?;

        let Some(event) = events.next().await else {
            break;
        };

        let key = match event {
            AppEvent::Key(key) => key,
            AppEvent::Resize(..) => continue,
        };

        match map_key(key) {
            KeyCommand::Quit => break,
            KeyCommand::Ignore => {}
            KeyCommand::Action(action) => {
                if !view.begin(action) {
                    continue;
                }
                terminal.draw(|frame| draw(frame, view.state()))?;
                view.resolve().await;

                // Controls are disabled while pending.
                if quit_requested(events.drain()) {
                    break;
                }
            }
        }
    }

    drop(guard);
    Ok(())
}

/// Discards input queued while controls were disabled. Returns true if a
/// quit key was among it.
fn quit_requested(queued: Vec<AppEvent>) -> bool {
    queued.into_iter().any(|event| match event {
        AppEvent::Key(key) => map_key(key) == KeyCommand::Quit,
        AppEvent::Resize(..) => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn queued_actions_are_dropped() {
        let queued = vec![
            key(KeyCode::Char('+')),
            key(KeyCode::Char('r')),
            AppEvent::Resize(80, 24),
            key(KeyCode::Char('-')),
        ];
        assert!(!quit_requested(queued));
    }

    #[test]
    fn queued_quit_is_honoured() {
        let queued = vec![key(KeyCode::Char('+')), key(KeyCode::Char('q'))];
        assert!(quit_requested(queued));
    }

    #[test]
    fn queued_ctrl_c_is_honoured() {
        let ctrl_c = AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(quit_requested(vec![ctrl_c]));
    }

    #[test]
    fn empty_queue_does_not_quit() {
        assert!(!quit_requested(Vec::new()));
    }
}
