//! Caller-owned game session.
//!
//! The engine outlives any one frame loop: the host keeps the session and
//! hands it to a new [`Coordinator`](crate::Coordinator) to resume play.

use crate::engine::Engine;

#[derive(Debug)]
pub struct Session<E: Engine> {
    engine: E,
    total_ticks: u64,
}

impl<E: Engine> Session<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            total_ticks: 0,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Ticks completed across every frame loop that ran this session.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    pub(crate) fn record_tick(&mut self) {
        self.total_ticks += 1;
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}
