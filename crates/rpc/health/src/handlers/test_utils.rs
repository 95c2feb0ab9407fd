use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use actix_web::web::Data;
use async_trait::async_trait;
use syncwatch_upstream::{error::FetchError, source::SyncSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LocalBlock,
    RemoteBlock,
    LocalSlot,
    RemoteSlot,
}

/// Returns fixed readings and counts how many upstream reads were made.
#[derive(Debug, Clone)]
pub struct MockSyncSource {
    inner: Arc<MockInner>,
}

#[derive(Debug)]
struct MockInner {
    local_block: u64,
    remote_block: u64,
    local_slot: u64,
    remote_slot: u64,
    failing_stage: Option<Stage>,
    calls: AtomicUsize,
    last_api_key: Mutex<Option<String>>,
}

impl MockSyncSource {
    pub fn new(local_block: u64, remote_block: u64, local_slot: u64, remote_slot: u64) -> Self {
        Self {
            inner: Arc::new(MockInner {
                local_block,
                remote_block,
                local_slot,
                remote_slot,
                failing_stage: None,
                calls: AtomicUsize::new(0),
                last_api_key: Mutex::new(None),
            }),
        }
    }

    pub fn failing_at(self, stage: Stage) -> Self {
        let inner = Arc::try_unwrap(self.inner).expect("mock is not shared yet");
        Self {
            inner: Arc::new(MockInner {
                failing_stage: Some(stage),
                ..inner
            }),
        }
    }

    pub fn data(&self) -> Data<Arc<dyn SyncSource>> {
        let source: Arc<dyn SyncSource> = Arc::new(self.clone());
        Data::new(source)
    }

    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.inner
            .last_api_key
            .lock()
            .expect("api key lock poisoned")
            .clone()
    }

    fn read(&self, stage: Stage, value: u64) -> Result<u64, FetchError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.failing_stage == Some(stage) {
            return Err(FetchError::MalformedResponse {
                endpoint: "http://mock/".to_string(),
                reason: "Simulated error".to_string(),
            });
        }
        Ok(value)
    }
}

#[async_trait]
impl SyncSource for MockSyncSource {
    async fn local_block_height(&self) -> Result<u64, FetchError> {
        self.read(Stage::LocalBlock, self.inner.local_block)
    }

    async fn remote_block_height(&self) -> Result<u64, FetchError> {
        self.read(Stage::RemoteBlock, self.inner.remote_block)
    }

    async fn local_beacon_slot(&self) -> Result<u64, FetchError> {
        self.read(Stage::LocalSlot, self.inner.local_slot)
    }

    async fn remote_beacon_slot(&self, api_key: &str) -> Result<u64, FetchError> {
        *self
            .inner
            .last_api_key
            .lock()
            .expect("api key lock poisoned") = Some(api_key.to_string());
        self.read(Stage::RemoteSlot, self.inner.remote_slot)
    }
}
