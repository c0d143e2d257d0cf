use async_trait::async_trait;
use screenlens_core::grant::{CaptureDecision, CaptureGrant};
use screenlens_engine::traits::CaptureAuthorizer;

/// Grants unconditionally, minting a fresh token.
///
/// Used on platforms without a modal capture gate. The token still exists
/// so the worker bootstrap looks the same everywhere.
#[derive(Debug, Default)]
pub struct PassiveAuthorizer;

#[async_trait]
impl CaptureAuthorizer for PassiveAuthorizer {
    async fn request(&self) -> anyhow::Result<CaptureDecision> {
        Ok(CaptureDecision::Granted(CaptureGrant::issue()))
    }
}
