use async_trait::async_trait;
use screenlens_core::flags::FlagKey;
use screenlens_core::grant::{CaptureDecision, CaptureGrant};

/// Persisted store for boolean preferences.
///
/// Implementations report `key.default_value()` for keys they have never
/// stored. Serialization of concurrent toggles happens above this trait;
/// implementations only need `set` to not corrupt the backing file.
pub trait FlagStore: Send + Sync {
    fn get(&self, key: FlagKey) -> anyhow::Result<bool>;
    fn set(&self, key: FlagKey, value: bool) -> anyhow::Result<()>;
}

/// One-shot OS screen-capture authorization prompt.
#[async_trait]
pub trait CaptureAuthorizer: Send + Sync {
    /// Suspends until the system prompt is answered. Resolves exactly once;
    /// a dismissed prompt resolves to `Denied`.
    async fn request(&self) -> anyhow::Result<CaptureDecision>;
}

/// Start/stop commands for the capture worker.
///
/// The worker's lifetime belongs to the operating environment; this trait
/// only issues commands and holds no handle to a running process.
#[async_trait]
pub trait WorkerControl: Send + Sync {
    /// Hands the grant to the worker and issues a begin command.
    async fn start(&self, grant: CaptureGrant) -> anyhow::Result<()>;

    /// Issues a terminate command. Stopping an absent worker is a no-op.
    async fn stop(&self) -> anyhow::Result<()>;
}

/// Display surface for text handed straight through to the user.
#[async_trait]
pub trait ResultsSink: Send + Sync {
    async fn show(&self, text: &str) -> anyhow::Result<()>;
}
