use tokio::sync::oneshot;

/// Outcome of the leave confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDecision {
    Confirmed,
    Cancelled,
}

/// Create a one-shot leave confirmation gate.
///
/// The UI shell keeps the responder and resolves it from the dialog buttons;
/// the session awaits the prompt. Dropping the responder (dialog dismissed)
/// counts as cancel. The decision is transient and nothing is persisted.
pub fn leave_prompt() -> (LeaveResponder, LeavePrompt) {
    let (tx, rx) = oneshot::channel();
    (LeaveResponder { tx }, LeavePrompt { rx })
}

pub struct LeaveResponder {
    tx: oneshot::Sender<LeaveDecision>,
}

impl LeaveResponder {
    pub fn confirm(self) {
        let _ = self.tx.send(LeaveDecision::Confirmed);
    }

    pub fn cancel(self) {
        let _ = self.tx.send(LeaveDecision::Cancelled);
    }
}

pub struct LeavePrompt {
    rx: oneshot::Receiver<LeaveDecision>,
}

impl LeavePrompt {
    /// Wait for the user's decision.
    pub async fn decision(self) -> LeaveDecision {
        self.rx.await.unwrap_or(LeaveDecision::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn confirm_resolves_the_prompt() {
        let (responder, prompt) = leave_prompt();
        responder.confirm();
        assert_eq!(prompt.decision().await, LeaveDecision::Confirmed);
    }

    #[tokio::test]
    async fn cancel_resolves_the_prompt() {
        let (responder, prompt) = leave_prompt();
        responder.cancel();
        assert_eq!(prompt.decision().await, LeaveDecision::Cancelled);
    }

    #[tokio::test]
    async fn dropping_the_responder_counts_as_cancel() {
        let (responder, prompt) = leave_prompt();
        drop(responder);
        assert_eq!(prompt.decision().await, LeaveDecision::Cancelled);
    }
}
