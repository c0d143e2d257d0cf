use crate::ipc::WorkerBootstrap;
use anyhow::Context;
use async_trait::async_trait;
use screenlens_core::grant::CaptureGrant;
use screenlens_engine::traits::WorkerControl;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

pub const PIDFILE_FILENAME: &str = "worker.pid";

#[derive(Debug, Error)]
pub enum WorkerError {
    /// A live worker pid is already recorded. Starting a second capture
    /// session is never implicit; the caller stops the old worker first.
    #[error("worker already running (pid {0})")]
    AlreadyRunning(u32),
}

/// Worker lifecycle over plain OS processes: spawn with the grant on stdin,
/// remember the pid in a pidfile, terminate by pid.
///
/// The spawned process is not supervised here; once started it belongs to
/// the operating environment.
pub struct ProcessWorkerControl {
    command: PathBuf,
    args: Vec<String>,
    pidfile: PathBuf,
}

impl ProcessWorkerControl {
    pub fn new(command: impl Into<PathBuf>, pidfile: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            pidfile: pidfile.into(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn pidfile(&self) -> &Path {
        &self.pidfile
    }

    fn recorded_pid(&self) -> anyhow::Result<Option<u32>> {
        let raw = match std::fs::read_to_string(&self.pidfile) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(anyhow::Error::new(e))
                    .with_context(|| format!("read pidfile: {}", self.pidfile.display()));
            }
        };

        match raw.trim().parse::<u32>() {
            Ok(pid) => Ok(Some(pid)),
            Err(_) => {
                // Corrupt pidfile; treat the worker as absent.
                log::warn!("unparseable pidfile {}, ignoring", self.pidfile.display());
                Ok(None)
            }
        }
    }

    fn clear_pidfile(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(&self.pidfile) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::Error::new(e))
                .with_context(|| format!("remove pidfile: {}", self.pidfile.display())),
        }
    }
}

#[async_trait]
impl WorkerControl for ProcessWorkerControl {
    async fn start(&self, grant: CaptureGrant) -> anyhow::Result<()> {
        if let Some(pid) = self.recorded_pid()? {
            if screenlens_platform::process::is_alive(pid) {
                return Err(WorkerError::AlreadyRunning(pid).into());
            }
            // Stale pidfile from a worker that died on its own.
            self.clear_pidfile()?;
        }

        let bootstrap = WorkerBootstrap::new(grant.into_token());
        let payload = serde_json::to_vec(&bootstrap).context("encode worker bootstrap")?;

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawn worker: {}", self.command.display()))?;

        // Hand over the grant and close the channel; EOF on stdin is the
        // worker's begin signal.
        let mut stdin = child.stdin.take().context("worker stdin unavailable")?;
        stdin.write_all(&payload).context("write worker bootstrap")?;
        drop(stdin);

        if let Some(parent) = self.pidfile.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create state directory: {}", parent.display()))?;
        }
        std::fs::write(&self.pidfile, child.id().to_string())
            .with_context(|| format!("write pidfile: {}", self.pidfile.display()))?;

        log::info!("worker started (pid {})", child.id());
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let Some(pid) = self.recorded_pid()? else {
            // Nothing recorded; stop is a no-op.
            return Ok(());
        };

        screenlens_platform::process::terminate(pid)?;
        self.clear_pidfile()?;
        log::info!("worker stopped (pid {pid})");
        Ok(())
    }
}
