//! Background analysis request
//!
//! Runs one analysis at a time on a worker thread so the UI keeps drawing
//! while the service responds.

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use super::client::BuildAnalyst;

/// What the UI should show for the current request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Pending,
    Ready(String),
    /// Failure detail; the UI shows a generic message
    Failed(String),
}

#[derive(Debug, Default)]
struct Shared {
    state: AnalysisState,
    /// Bumped on every start/clear so stale results are dropped
    generation: u64,
    in_flight: bool,
}

pub struct AnalysisTask {
    analyst: Arc<dyn BuildAnalyst>,
    shared: Arc<Mutex<Shared>>,
}

impl AnalysisTask {
    pub fn new(analyst: Arc<dyn BuildAnalyst>) -> Self {
        Self {
            analyst,
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    pub fn state(&self) -> AnalysisState {
        self.shared.lock().state.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.shared.lock().in_flight
    }

    /// Start analysing `prompt`. Returns false if a request is already running.
    pub fn start(&self, prompt: String) -> bool {
        let generation = {
            let mut shared = self.shared.lock();
            if shared.in_flight {
                return false;
            }
            shared.in_flight = true;
            shared.generation += 1;
            shared.state = AnalysisState::Pending;
            shared.generation
        };

        let analyst = Arc::clone(&self.analyst);
        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("analysis".to_string())
            .spawn(move || {
                let outcome = analyst.analyze(&prompt);
                let mut shared = shared.lock();
                if shared.generation != generation {
                    log::debug!("Dropping stale analysis result");
                    return;
                }
                shared.in_flight = false;
                shared.state = match outcome {
                    Ok(text) => {
                        log::info!("Analysis received ({} chars)", text.len());
                        AnalysisState::Ready(text)
                    }
                    Err(e) => {
                        log::warn!("Analysis failed: {}", e);
                        AnalysisState::Failed(e.to_string())
                    }
                };
            });

        if let Err(e) = spawned {
            log::warn!("Could not start analysis thread: {}", e);
            let mut shared = self.shared.lock();
            shared.in_flight = false;
            shared.state = AnalysisState::Failed(e.to_string());
        }
        true
    }

    /// Forget the current result (e.g. another build was selected).
    /// A request still running is abandoned, so a new one may start at once.
    pub fn clear(&self) {
        let mut shared = self.shared.lock();
        shared.generation += 1;
        shared.in_flight = false;
        shared.state = AnalysisState::Idle;
    }
}
