//! Counter screen: state machine, reducer, and the controller that talks to
//! the remote store.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterViewState;
pub use view::CounterView;
