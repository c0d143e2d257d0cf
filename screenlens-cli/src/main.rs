use clap::{Parser, Subcommand};
use screenlens_core::request::InvocationRequest;
use screenlens_engine::controller::LaunchController;
use screenlens_engine::traits::ResultsSink;
use screenlens_runtime::defaults;
use screenlens_runtime::flag_store::JsonFlagStore;
use screenlens_runtime::worker::{PIDFILE_FILENAME, ProcessWorkerControl};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "screenlens", version, about = "Screen capture launcher")]
struct Cli {
    /// Directory for the flags file and the worker pidfile.
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Worker command to launch once capture is authorized.
    #[arg(long)]
    worker: Option<PathBuf>,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Request capture authorization and start the worker.
    Launch,
    /// Flip the preview-image flag and restart the worker.
    TogglePreview,
    /// Flip the horizontal-text flag and restart the worker.
    ToggleLayout,
    /// Show text in the results display without touching capture.
    Passthrough { text: String },
}

struct StdoutResults;

#[async_trait::async_trait]
impl ResultsSink for StdoutResults {
    async fn show(&self, text: &str) -> anyhow::Result<()> {
        println!("{text}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let state_dir = match cli.state_dir {
        Some(dir) => dir,
        None => defaults::default_state_dir()?,
    };
    let worker_command = cli
        .worker
        .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_WORKER_COMMAND));

    let request = match cli.action.unwrap_or(Action::Launch) {
        Action::Launch => InvocationRequest::plain_launch(),
        Action::TogglePreview => InvocationRequest::toggle_preview_visibility(),
        Action::ToggleLayout => InvocationRequest::toggle_page_layout(),
        Action::Passthrough { text } => InvocationRequest::passthrough(text),
    };

    let store = Arc::new(JsonFlagStore::in_dir(&state_dir));
    let worker = Arc::new(ProcessWorkerControl::new(
        worker_command,
        state_dir.join(PIDFILE_FILENAME),
    ));

    let controller = LaunchController::new(
        store,
        screenlens_platform::native_authorizer(),
        worker,
        Arc::new(StdoutResults),
    );

    let outcome = controller.handle(request).await?;
    log::info!("session finished: {}", outcome.label());
    Ok(())
}
