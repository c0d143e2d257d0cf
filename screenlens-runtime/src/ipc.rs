use screenlens_core::grant::GrantToken;
use serde::{Deserialize, Serialize};

pub const BOOTSTRAP_VERSION: u32 = 1;

/// The only message written to the worker's stdin at start. EOF after it
/// doubles as the begin command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerBootstrap {
    pub version: u32,
    pub grant_token: GrantToken,
}

impl WorkerBootstrap {
    pub fn new(grant_token: GrantToken) -> Self {
        Self {
            version: BOOTSTRAP_VERSION,
            grant_token,
        }
    }
}
