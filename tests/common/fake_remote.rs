//! In-process stand-in for the counter server.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tally::client::{ClientError, CounterRemote};
use tally::store::{now_millis, CounterAction, CounterRecord};

struct FakeState {
    record: Mutex<CounterRecord>,
    reachable: AtomicBool,
    get_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

/// Scriptable remote that records how often it was called.
#[derive(Clone)]
pub struct FakeRemote {
    state: Arc<FakeState>,
}

impl FakeRemote {
    pub fn with_record(id: i64, count: i64) -> Self {
        Self {
            state: Arc::new(FakeState {
                record: Mutex::new(CounterRecord {
                    id,
                    count,
                    updated_at: now_millis(),
                }),
                reachable: AtomicBool::new(true),
                get_calls: AtomicUsize::new(0),
                update_calls: AtomicUsize::new(0),
            }),
        }
    }

    pub fn online(count: i64) -> Self {
        Self::with_record(7, count)
    }

    pub fn unreachable() -> Self {
        let remote = Self::online(0);
        remote.set_reachable(false);
        remote
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.state.reachable.store(reachable, Ordering::SeqCst);
    }

    pub fn get_calls(&self) -> usize {
        self.state.get_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.state.update_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.get_calls() + self.update_calls()
    }

    /// What the fake store currently holds.
    pub fn record(&self) -> CounterRecord {
        self.state.record.lock().clone()
    }

    fn check_reachable(&self) -> Result<(), ClientError> {
        if self.state.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ClientError::Server {
                status: 503,
                error_type: "unavailable".to_string(),
                message: "fake store is down".to_string(),
            })
        }
    }
}

impl CounterRemote for FakeRemote {
    async fn get_counter(&self) -> Result<CounterRecord, ClientError> {
        self.state.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        Ok(self.record())
    }

    async fn update_counter(&self, action: CounterAction) -> Result<CounterRecord, ClientError> {
        self.state.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        let mut record = self.state.record.lock();
        *record = record.with_action(action, now_millis());
        Ok(record.clone())
    }
}
