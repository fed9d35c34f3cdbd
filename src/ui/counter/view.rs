use crate::client::CounterRemote;
use crate::store::{now_millis, CounterAction, CounterRecord};
use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::reducer::CounterReducer;
use crate::ui::counter::state::CounterViewState;
use crate::ui::mvi::Reducer;

/// Drives [`CounterViewState`] against a remote store.
///
/// Performs the remote calls the current state asks for and feeds their
/// outcome back through [`CounterReducer`]. Once offline, the remote is
/// never called again by this instance.
pub struct CounterView<R> {
    remote: R,
    state: CounterViewState,
}

impl<R: CounterRemote> CounterView<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            state: CounterViewState::loading(CounterRecord::placeholder(now_millis())),
        }
    }

    pub fn state(&self) -> &CounterViewState {
        &self.state
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Initial read. Only has an effect while loading.
    pub async fn mount(&mut self) {
        if self.state.has_loaded() {
            return;
        }

        let intent = match self.remote.get_counter().await {
            Ok(record) => CounterIntent::Loaded(record),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load counter, going offline");
                CounterIntent::LoadFailed
            }
        };
        self.dispatch(intent);
    }

    /// Mark `action` as pending. Returns false if controls are disabled.
    pub fn begin(&mut self, action: CounterAction) -> bool {
        if !self.state.accepts_actions() {
            return false;
        }
        self.dispatch(CounterIntent::Begin(action));
        true
    }

    /// Complete the pending action, remotely when online and locally when
    /// offline.
    pub async fn resolve(&mut self) {
        let intent = match &self.state {
            CounterViewState::Online {
                pending: Some(action),
                ..
            } => {
                let action = *action;
                match self.remote.update_counter(action).await {
                    Ok(record) => CounterIntent::Applied(record),
                    Err(err) => {
                        tracing::warn!(%action, error = %err, "Failed to update counter, going offline");
                        CounterIntent::ApplyFailed { at: now_millis() }
                    }
                }
            }
            CounterViewState::Offline {
                pending: Some(_), ..
            } => CounterIntent::AppliedLocally { at: now_millis() },
            _ => return,
        };
        self.dispatch(intent);
    }

    /// `begin` followed by `resolve`. Returns false if the action was ignored.
    pub async fn perform(&mut self, action: CounterAction) -> bool {
        if !self.begin(action) {
            return false;
        }
        self.resolve().await;
        true
    }

    fn dispatch(&mut self, intent: CounterIntent) {
        let was_reachable = self.state.store_reachable();
        self.state = CounterReducer::reduce(self.state.clone(), intent);

        if was_reachable && !self.state.store_reachable() {
            tracing::info!("Counter view is now offline; changes won't persist");
        }
    }
}
