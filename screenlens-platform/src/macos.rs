use async_trait::async_trait;
use core_graphics::access::ScreenCaptureAccess;
use screenlens_core::grant::{CaptureDecision, CaptureGrant};
use screenlens_engine::traits::CaptureAuthorizer;

/// Screen Recording permission via CoreGraphics.
///
/// `preflight` reports the current authorization without UI; `request`
/// raises the system prompt on first use and reports the answer. A
/// dismissed prompt reads as not granted, which maps to `Denied`.
#[derive(Default)]
pub struct ScreenRecordingAuthorizer {
    access: ScreenCaptureAccess,
}

impl ScreenRecordingAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CaptureAuthorizer for ScreenRecordingAuthorizer {
    async fn request(&self) -> anyhow::Result<CaptureDecision> {
        if self.access.preflight() {
            return Ok(CaptureDecision::Granted(CaptureGrant::issue()));
        }

        if self.access.request() {
            Ok(CaptureDecision::Granted(CaptureGrant::issue()))
        } else {
            Ok(CaptureDecision::Denied)
        }
    }
}
