//! Gateway request bookkeeping
//!
//! Views never call the gateway themselves. Their requests are queued here;
//! the page (or [`DesktopEngine::run_pending`]) executes them and reports
//! each completion back by request id.

use log::debug;
use studio_gateway::Gateway;

use super::{DesktopEngine, Effect};
use crate::error::DesktopError;
use crate::requests::{self, PendingRequest, RequestId, RequestOutcome};

impl DesktopEngine {
    /// Requests issued since the last call, for the page to execute
    pub fn take_requests(&mut self) -> Vec<PendingRequest> {
        self.pending.drain_outbox()
    }

    /// Number of requests awaiting completion
    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Report the outcome of a request.
    ///
    /// The outcome reaches the view that issued it if its window is still
    /// open; otherwise it is dropped.
    pub fn complete(&mut self, id: RequestId, outcome: RequestOutcome) -> Result<Vec<Effect>, DesktopError> {
        let pending = self.pending.take(id).ok_or(DesktopError::UnknownRequest(id))?;
        let Some(view) = self.views.get_mut(&pending.window_id) else {
            debug!(
                "dropping completion of request {} for closed window {}",
                id, pending.window_id
            );
            return Ok(Vec::new());
        };

        let actions = view.on_complete(&pending.request, outcome);
        Ok(self.process_actions(pending.window_id, actions))
    }

    /// Execute queued requests against `gateway` until none are left
    pub fn run_pending<G: Gateway + ?Sized>(&mut self, gateway: &G) -> Vec<Effect> {
        let mut effects = Vec::new();
        loop {
            let batch = self.take_requests();
            if batch.is_empty() {
                break;
            }
            for pending in batch {
                let outcome = requests::execute(
                    gateway,
                    &pending.request,
                    self.user.as_ref(),
                    &self.config.font_limits,
                    self.now_ms,
                );
                // Ids come from the batch just drained
                if let Ok(more) = self.complete(pending.id, outcome) {
                    effects.extend(more);
                }
            }
        }
        effects
    }

    /// Ask the gateway who is signed in
    pub fn refresh_user<G: Gateway + ?Sized>(&mut self, gateway: &G) -> Result<(), DesktopError> {
        let user = gateway.current_user()?;
        self.set_user(user);
        Ok(())
    }
}
