use crate::collaborators::Publisher;
use async_trait::async_trait;
use erewhon_core::Content;
use erewhon_error::{ErewhonResult, PublishError};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{info, instrument};

#[derive(Debug, Default)]
struct Ledger {
    published: u64,
    // content id -> (base published id, latest revision number)
    lineage: HashMap<String, (String, u32)>,
}

/// Publisher that hands out sequential video ids.
///
/// Originals get `erewhon_video_<n>`; revisions get the id of the content
/// they derive from with a `_v<k>` suffix.
#[derive(Debug, Default)]
pub struct MockPublisher {
    ledger: Mutex<Ledger>,
    fail: bool,
}

impl MockPublisher {
    /// Creates a publisher that accepts every upload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a publisher that rejects every upload.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of originals published so far.
    pub fn published_count(&self) -> u64 {
        self.ledger.lock().published
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    #[instrument(skip(self, content), fields(content_id = %content.id()))]
    async fn publish(&self, content: &Content) -> ErewhonResult<String> {
        if self.fail {
            return Err(PublishError::new("Upload rejected by platform").into());
        }

        let mut ledger = self.ledger.lock();
        let published_id = match content.parent_id() {
            Some(parent) => {
                let (base, revision) = ledger.lineage.get(parent).cloned().ok_or_else(|| {
                    PublishError::new(format!("Parent content '{}' was never published", parent))
                })?;
                let next = revision + 1;
                ledger.lineage.insert(parent.clone(), (base.clone(), next));
                ledger
                    .lineage
                    .insert(content.id().clone(), (base.clone(), next));
                format!("{}_v{}", base, next)
            }
            None => {
                ledger.published += 1;
                let id = format!("erewhon_video_{}", ledger.published);
                ledger
                    .lineage
                    .insert(content.id().clone(), (id.clone(), 1));
                id
            }
        };

        info!(
            url = %format!("https://youtube.com/watch?v={}", published_id),
            "Published"
        );
        Ok(published_id)
    }
}
