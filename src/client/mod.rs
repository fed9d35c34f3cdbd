//! Client side of the counter RPC contract.

mod error;
mod http;

use std::future::Future;

use crate::store::{CounterAction, CounterRecord};

pub use error::ClientError;
pub use http::HttpCounterClient;

/// The two remote operations the counter view depends on.
pub trait CounterRemote {
    fn get_counter(&self) -> impl Future<Output = Result<CounterRecord, ClientError>> + Send;

    fn update_counter(
        &self,
        action: CounterAction,
    ) -> impl Future<Output = Result<CounterRecord, ClientError>> + Send;
}
