use messaging::QueueProducer;
use observability::IngestMetrics;
use std::sync::Arc;
use std::time::Instant;

use crate::error::DemoResult;
use crate::generator::{RandomRecordGenerator, RecordGenerator};
use crate::models::{IngestPath, OrderKey, StoredRecord, TOP_N};
use crate::repository::DemoRepository;

/// Ingestion dispatcher and query service for demo records
#[derive(Clone)]
pub struct DemoService<R: DemoRepository> {
    repository: Arc<R>,
    producer: QueueProducer,
    generator: Arc<dyn RecordGenerator>,
}

impl<R: DemoRepository> DemoService<R> {
    pub fn new(repository: R, producer: QueueProducer) -> Self {
        Self {
            repository: Arc::new(repository),
            producer,
            generator: Arc::new(RandomRecordGenerator),
        }
    }

    /// Replace the record generation strategy
    pub fn with_generator(mut self, generator: impl RecordGenerator + 'static) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    /// Generate a record and write it through the chosen path.
    ///
    /// The queue path always succeeds; enqueue failures are logged by the
    /// producer. The direct path fails with `Duplicate` when the pair exists.
    pub async fn create(&self, use_queue: bool) -> DemoResult<()> {
        let record = self.generator.generate();
        let path = IngestPath::from_flag(use_queue);

        tracing::debug!(
            event_id = record.event_id,
            user_id = record.user_id,
            path = path.as_str(),
            "Creating record"
        );

        match path {
            IngestPath::Queue => {
                self.producer.enqueue(&record).await;
            }
            IngestPath::Direct => {
                if let Err(e) = self.repository.insert(record).await {
                    if e.is_duplicate() {
                        IngestMetrics::record_duplicate();
                        tracing::warn!(
                            event_id = record.event_id,
                            user_id = record.user_id,
                            "Duplicate record rejected"
                        );
                    }
                    return Err(e);
                }
            }
        }

        IngestMetrics::record_created(path.as_str());
        Ok(())
    }

    /// Most recent records, at most [`TOP_N`].
    pub async fn list(&self, order_by_timestamp: bool) -> DemoResult<Vec<StoredRecord>> {
        let order = OrderKey::from_flag(order_by_timestamp);
        let started = Instant::now();

        let records = self.repository.list_top_n(TOP_N, order).await?;

        IngestMetrics::record_listed(order.as_str(), records.len(), started.elapsed());
        Ok(records)
    }
}
