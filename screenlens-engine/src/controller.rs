use crate::session::LaunchOutcome;
use crate::toggle::FlagToggler;
use crate::traits::{CaptureAuthorizer, FlagStore, ResultsSink, WorkerControl};
use screenlens_core::grant::CaptureDecision;
use screenlens_core::request::InvocationRequest;
use std::sync::Arc;

/// Sequences one invocation session: optional flag toggle plus worker stop,
/// then the capture grant, then (only on a grant) the worker start.
pub struct LaunchController {
    toggler: FlagToggler,
    authorizer: Arc<dyn CaptureAuthorizer>,
    worker: Arc<dyn WorkerControl>,
    results: Arc<dyn ResultsSink>,
}

impl LaunchController {
    pub fn new(
        store: Arc<dyn FlagStore>,
        authorizer: Arc<dyn CaptureAuthorizer>,
        worker: Arc<dyn WorkerControl>,
        results: Arc<dyn ResultsSink>,
    ) -> Self {
        Self {
            toggler: FlagToggler::new(store),
            authorizer,
            worker,
            results,
        }
    }

    /// Runs one session to completion.
    ///
    /// A denied grant is a normal outcome, not an error. Only collaborator
    /// failures (store, worker, display) surface as `Err` and abort the
    /// invocation.
    pub async fn handle(&self, request: InvocationRequest) -> anyhow::Result<LaunchOutcome> {
        if let Some(text) = request.passthrough_text {
            self.results.show(&text).await?;
            return Ok(LaunchOutcome::PassthroughShown);
        }

        if let Some(flag) = request.toggle.flag() {
            self.toggler.toggle(flag)?;
            log::info!("toggled {}; stopping worker so it reloads", flag.name());
            // The worker may not be running; stop is benign either way.
            self.worker.stop().await?;
        }

        match self.authorizer.request().await? {
            CaptureDecision::Denied => {
                log::info!("capture authorization denied");
                Ok(LaunchOutcome::GrantDenied)
            }
            CaptureDecision::Granted(grant) => {
                self.worker.start(grant).await?;
                log::info!("worker started with a fresh capture grant");
                Ok(LaunchOutcome::WorkerStarted)
            }
        }
    }
}
