use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterViewState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterViewState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Loaded(record) => match state {
                CounterViewState::Loading { .. } => CounterViewState::Online {
                    mirror: record,
                    pending: None,
                },
                other => other,
            },
            CounterIntent::LoadFailed => match state {
                CounterViewState::Loading { mirror } => CounterViewState::Offline {
                    mirror,
                    pending: None,
                },
                other => other,
            },
            CounterIntent::Begin(action) => match state {
                CounterViewState::Online {
                    mirror,
                    pending: None,
                } => CounterViewState::Online {
                    mirror,
                    pending: Some(action),
                },
                CounterViewState::Offline {
                    mirror,
                    pending: None,
                } => CounterViewState::Offline {
                    mirror,
                    pending: Some(action),
                },
                // Still loading, or another action in flight: controls are disabled
                other => other,
            },
            CounterIntent::Applied(record) => match state {
                CounterViewState::Online {
                    pending: Some(_), ..
                } => CounterViewState::Online {
                    mirror: record,
                    pending: None,
                },
                other => other,
            },
            CounterIntent::ApplyFailed { at } => match state {
                CounterViewState::Online {
                    mirror,
                    pending: Some(action),
                } => CounterViewState::Offline {
                    mirror: mirror.with_action(action, at),
                    pending: None,
                },
                other => other,
            },
            CounterIntent::AppliedLocally { at } => match state {
                CounterViewState::Offline {
                    mirror,
                    pending: Some(action),
                } => CounterViewState::Offline {
                    mirror: mirror.with_action(action, at),
                    pending: None,
                },
                other => other,
            },
        }
    }
}
