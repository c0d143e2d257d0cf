pub mod authorizer;
#[cfg(target_os = "macos")]
pub mod macos;
pub mod process;

use screenlens_engine::traits::CaptureAuthorizer;
use std::sync::Arc;

/// Authorizer for the current platform.
///
/// macOS gates screen capture behind a per-app Screen Recording prompt;
/// X11 and Windows expose capture to any client, so the grant is minted
/// locally without a prompt.
pub fn native_authorizer() -> Arc<dyn CaptureAuthorizer> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(macos::ScreenRecordingAuthorizer::new())
    }

    #[cfg(not(target_os = "macos"))]
    {
        Arc::new(authorizer::PassiveAuthorizer)
    }
}
