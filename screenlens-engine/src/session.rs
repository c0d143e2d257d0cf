/// Which exit path a controller session took.
///
/// Every variant terminates the session; this exists so callers and tests
/// can observe the path, not so anyone can keep the session alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Text was forwarded to the results display; nothing else ran.
    PassthroughShown,
    /// The user declined (or dismissed) the capture prompt. Not an error.
    GrantDenied,
    /// The worker received the grant and a begin command.
    WorkerStarted,
}

impl LaunchOutcome {
    // A stable string label for logs.
    // This is intentionally not derived from `Debug`.
    pub fn label(&self) -> &'static str {
        match self {
            LaunchOutcome::PassthroughShown => "passthrough",
            LaunchOutcome::GrantDenied => "denied",
            LaunchOutcome::WorkerStarted => "started",
        }
    }
}
