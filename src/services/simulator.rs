//! Delayed, single-flight execution of attack simulations.
//!
//! Each run waits out an artificial latency before evaluating, then commits
//! its result to the single latest-result slot. Only one run may be in
//! flight. A run can be cancelled through its handle; dropping the handle
//! does not cancel it.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::models::simulation::{SimulationRequest, SimulationResult};
use crate::services::attack_simulation::{
    self, IdGenerator, RandomIdGenerator, SimulationError,
};

/// Shared simulator; cheap to clone.
#[derive(Clone)]
pub struct SimulationService {
    inner: Arc<Inner>,
}

struct Inner {
    delay: Duration,
    default_website_id: String,
    ids: Mutex<Box<dyn IdGenerator>>,
    slot: Mutex<Slot>,
}

#[derive(Default)]
struct Slot {
    running: bool,
    latest: Option<SimulationResult>,
}

impl std::fmt::Debug for SimulationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationService")
            .field("delay", &self.inner.delay)
            .field("default_website_id", &self.inner.default_website_id)
            .finish_non_exhaustive()
    }
}

/// Handle to an in-flight run.
#[derive(Debug)]
pub struct SimulationHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<SimulationResult, SimulationError>>,
}

impl SimulationHandle {
    /// Request cancellation. Returns false once the run is past its delay
    /// or cancel was already requested; such a run still commits.
    pub fn cancel(&mut self) -> bool {
        self.cancel_tx
            .take()
            .map_or(false, |tx| tx.send(()).is_ok())
    }

    /// Wait for the run to finish.
    pub async fn wait(self) -> Result<SimulationResult, SimulationError> {
        self.task
            .await
            .map_err(|e| SimulationError::Task(e.to_string()))?
    }
}

impl SimulationService {
    pub fn new(
        delay: Duration,
        default_website_id: impl Into<String>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                delay,
                default_website_id: default_website_id.into(),
                ids: Mutex::new(ids),
                slot: Mutex::new(Slot::default()),
            }),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Duration::from_millis(config.simulation_delay_ms),
            config.default_website_id.clone(),
            Box::new(RandomIdGenerator::from_entropy()),
        )
    }

    /// Start a run in the background.
    ///
    /// Guard failures and the single-flight check happen before anything
    /// is spawned, so a rejected call leaves the slot untouched.
    pub async fn start(
        &self,
        request: SimulationRequest,
    ) -> Result<SimulationHandle, SimulationError> {
        if !attack_simulation::has_manipulated(&request.parameters) {
            tracing::warn!(
                endpoint = %request.target_endpoint,
                "Simulation rejected: no parameters marked for manipulation"
            );
            return Err(SimulationError::NoManipulationSelected);
        }

        {
            let mut slot = self.inner.slot.lock().await;
            if slot.running {
                return Err(SimulationError::AlreadyRunning);
            }
            slot.running = true;
        }

        tracing::info!(
            method = %request.method,
            endpoint = %request.target_endpoint,
            parameters = request.parameters.len(),
            "Simulation started"
        );

        let (cancel_tx, cancel_rx) = oneshot::channel();
        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move { inner.execute(request, cancel_rx).await });

        Ok(SimulationHandle {
            cancel_tx: Some(cancel_tx),
            task,
        })
    }

    /// Start a run and wait for its result.
    pub async fn run(&self, request: SimulationRequest) -> Result<SimulationResult, SimulationError> {
        self.start(request).await?.wait().await
    }

    /// Most recent committed result, if any.
    pub async fn latest(&self) -> Option<SimulationResult> {
        self.inner.slot.lock().await.latest.clone()
    }

    pub async fn is_running(&self) -> bool {
        self.inner.slot.lock().await.running
    }

    pub fn delay(&self) -> Duration {
        self.inner.delay
    }
}

impl Inner {
    async fn execute(
        &self,
        request: SimulationRequest,
        mut cancel_rx: oneshot::Receiver<()>,
    ) -> Result<SimulationResult, SimulationError> {
        // A dropped sender yields Err and disables the cancel branch.
        tokio::select! {
            _ = tokio::time::sleep(self.delay) => {}
            Ok(()) = &mut cancel_rx => {
                self.slot.lock().await.running = false;
                tracing::info!(endpoint = %request.target_endpoint, "Simulation cancelled");
                return Err(SimulationError::Cancelled);
            }
        }
        // Past the delay the run always commits; later cancels must fail.
        drop(cancel_rx);

        let website_id = request
            .website_id
            .clone()
            .unwrap_or_else(|| self.default_website_id.clone());

        let outcome = {
            let mut ids = self.ids.lock().await;
            attack_simulation::evaluate(&request, &website_id, ids.as_mut(), Utc::now())
        };

        let mut slot = self.slot.lock().await;
        slot.running = false;
        match &outcome {
            Ok(result) => {
                tracing::info!(
                    id = %result.id,
                    website_id = %result.website_id,
                    success = result.success,
                    response_code = result.response_code,
                    "Simulation completed"
                );
                slot.latest = Some(result.clone());
            }
            Err(e) => tracing::error!(error = %e, "Simulation failed"),
        }
        outcome
    }
}
