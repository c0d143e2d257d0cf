use screenlens_core::flags::FlagKey;
use screenlens_core::grant::{CaptureDecision, CaptureGrant};
use screenlens_core::request::InvocationRequest;
use screenlens_engine::controller::LaunchController;
use screenlens_engine::session::LaunchOutcome;
use screenlens_engine::traits::{CaptureAuthorizer, FlagStore, ResultsSink, WorkerControl};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MemoryFlagStore {
    values: Mutex<HashMap<FlagKey, bool>>,
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: FlagKey) -> anyhow::Result<bool> {
        Ok(self
            .values
            .lock()
            .unwrap()
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_value()))
    }

    fn set(&self, key: FlagKey, value: bool) -> anyhow::Result<()> {
        self.values.lock().unwrap().insert(key, value);
        Ok(())
    }
}

struct ScriptedAuthorizer {
    grant: bool,
    calls: AtomicUsize,
}

impl ScriptedAuthorizer {
    fn granting() -> Self {
        Self {
            grant: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn denying() -> Self {
        Self {
            grant: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CaptureAuthorizer for ScriptedAuthorizer {
    async fn request(&self) -> anyhow::Result<CaptureDecision> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.grant {
            Ok(CaptureDecision::Granted(CaptureGrant::issue()))
        } else {
            Ok(CaptureDecision::Denied)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum WorkerEvent {
    Started(String),
    Stopped,
}

#[derive(Default)]
struct RecordingWorker {
    events: Mutex<Vec<WorkerEvent>>,
}

impl RecordingWorker {
    fn events(&self) -> Vec<WorkerEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl WorkerControl for RecordingWorker {
    async fn start(&self, grant: CaptureGrant) -> anyhow::Result<()> {
        let token = grant.into_token();
        self.events
            .lock()
            .unwrap()
            .push(WorkerEvent::Started(token.as_str().to_string()));
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(WorkerEvent::Stopped);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingSink {
    shown: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl ResultsSink for RecordingSink {
    async fn show(&self, text: &str) -> anyhow::Result<()> {
        self.shown.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct Harness {
    store: Arc<MemoryFlagStore>,
    authorizer: Arc<ScriptedAuthorizer>,
    worker: Arc<RecordingWorker>,
    sink: Arc<RecordingSink>,
    controller: LaunchController,
}

fn harness(authorizer: ScriptedAuthorizer) -> Harness {
    let store = Arc::new(MemoryFlagStore::default());
    let authorizer = Arc::new(authorizer);
    let worker = Arc::new(RecordingWorker::default());
    let sink = Arc::new(RecordingSink::default());

    let controller = LaunchController::new(
        store.clone(),
        authorizer.clone(),
        worker.clone(),
        sink.clone(),
    );

    Harness {
        store,
        authorizer,
        worker,
        sink,
        controller,
    }
}

#[tokio::test]
async fn plain_launch_starts_worker_when_granted() {
    let h = harness(ScriptedAuthorizer::granting());

    let outcome = h
        .controller
        .handle(InvocationRequest::plain_launch())
        .await
        .unwrap();

    assert_eq!(outcome, LaunchOutcome::WorkerStarted);
    let events = h.worker.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], WorkerEvent::Started(_)));
}

#[tokio::test]
async fn plain_launch_does_nothing_when_denied() {
    let h = harness(ScriptedAuthorizer::denying());

    let outcome = h
        .controller
        .handle(InvocationRequest::plain_launch())
        .await
        .unwrap();

    assert_eq!(outcome, LaunchOutcome::GrantDenied);
    assert!(h.worker.events().is_empty());
}

#[tokio::test]
async fn preview_toggle_stops_once_before_any_start() {
    let h = harness(ScriptedAuthorizer::granting());

    h.controller
        .handle(InvocationRequest::toggle_preview_visibility())
        .await
        .unwrap();

    let events = h.worker.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], WorkerEvent::Stopped);
    assert!(matches!(events[1], WorkerEvent::Started(_)));
}

#[tokio::test]
async fn denied_preview_toggle_still_flips_flag_and_stops_once() {
    let h = harness(ScriptedAuthorizer::denying());
    assert!(h.store.get(FlagKey::ShowPreviewImage).unwrap());

    let outcome = h
        .controller
        .handle(InvocationRequest::toggle_preview_visibility())
        .await
        .unwrap();

    assert_eq!(outcome, LaunchOutcome::GrantDenied);
    assert!(!h.store.get(FlagKey::ShowPreviewImage).unwrap());
    assert_eq!(h.worker.events(), vec![WorkerEvent::Stopped]);
}

#[tokio::test]
async fn layout_toggle_flips_horizontal_text_only() {
    let h = harness(ScriptedAuthorizer::denying());

    h.controller
        .handle(InvocationRequest::toggle_page_layout())
        .await
        .unwrap();

    assert!(!h.store.get(FlagKey::HorizontalText).unwrap());
    assert!(h.store.get(FlagKey::ShowPreviewImage).unwrap());
    assert_eq!(h.worker.events(), vec![WorkerEvent::Stopped]);
}

#[tokio::test]
async fn passthrough_only_touches_the_results_display() {
    let h = harness(ScriptedAuthorizer::granting());

    let outcome = h
        .controller
        .handle(InvocationRequest::passthrough("こんにちは"))
        .await
        .unwrap();

    assert_eq!(outcome, LaunchOutcome::PassthroughShown);
    assert_eq!(*h.sink.shown.lock().unwrap(), vec!["こんにちは".to_string()]);
    assert_eq!(h.authorizer.calls(), 0);
    assert!(h.worker.events().is_empty());
}

#[tokio::test]
async fn each_granted_launch_carries_a_distinct_token() {
    let h = harness(ScriptedAuthorizer::granting());

    h.controller
        .handle(InvocationRequest::plain_launch())
        .await
        .unwrap();
    h.controller
        .handle(InvocationRequest::plain_launch())
        .await
        .unwrap();

    let tokens: Vec<_> = h
        .worker
        .events()
        .into_iter()
        .filter_map(|e| match e {
            WorkerEvent::Started(t) => Some(t),
            WorkerEvent::Stopped => None,
        })
        .collect();
    assert_eq!(tokens.len(), 2);
    assert_ne!(tokens[0], tokens[1]);
}

#[tokio::test]
async fn storage_failure_aborts_before_the_worker_is_touched() {
    struct BrokenStore;

    impl FlagStore for BrokenStore {
        fn get(&self, _key: FlagKey) -> anyhow::Result<bool> {
            Err(anyhow::anyhow!("preferences file unavailable"))
        }

        fn set(&self, _key: FlagKey, _value: bool) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("preferences file unavailable"))
        }
    }

    let authorizer = Arc::new(ScriptedAuthorizer::granting());
    let worker = Arc::new(RecordingWorker::default());
    let controller = LaunchController::new(
        Arc::new(BrokenStore),
        authorizer.clone(),
        worker.clone(),
        Arc::new(RecordingSink::default()),
    );

    let res = controller
        .handle(InvocationRequest::toggle_preview_visibility())
        .await;

    assert!(res.is_err());
    assert!(worker.events().is_empty());
    assert_eq!(authorizer.calls(), 0);
}
