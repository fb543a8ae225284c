//! Inspect files use case
//!
//! Reads file prefixes concurrently, then classifies each prefix and
//! compares it with the file's declared type.

use super::upload_type::upload_content_type;
use crate::application::dto::{BatchReport, FileInspection, SniffOptions};
use crate::domain::entities::FileIdentity;
use crate::domain::repositories::PrefixSource;
use crate::domain::services::{Classifier, MismatchEvaluator};
use crate::error::ConfigError;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

/// Inspect files use case
///
/// Classification itself is cheap and synchronous; only the prefix reads
/// are spawned onto the blocking pool. Results come back in input order
/// no matter which read finishes first.
#[derive(Debug, Clone)]
pub struct InspectFilesUseCase {
    classifier: Classifier,
    evaluator: MismatchEvaluator,
    options: SniffOptions,
}

impl InspectFilesUseCase {
    /// Creates the use case after validating `options`
    pub fn new(options: SniffOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            classifier: Classifier::default(),
            evaluator: MismatchEvaluator::new(options.match_policy),
            options,
        })
    }

    pub fn options(&self) -> &SniffOptions {
        &self.options
    }

    /// Inspects a prefix that is already in memory
    ///
    /// Bytes beyond the configured prefix length are ignored.
    pub fn inspect_prefix(
        &self,
        identity: FileIdentity,
        declared_type: &str,
        prefix: &[u8],
    ) -> FileInspection {
        let prefix = &prefix[..prefix.len().min(self.options.prefix_len)];
        let classification = self.classifier.classify(prefix);
        let report = self
            .evaluator
            .evaluate_classification(declared_type, classification);

        tracing::debug!(
            file = %identity,
            declared = declared_type,
            detected = classification.mime(),
            is_match = report.is_match,
            "classified"
        );

        FileInspection {
            upload_type: upload_content_type(classification, declared_type),
            identity,
            classification,
            report,
            read_error: None,
        }
    }

    /// Inspects every source, reading prefixes concurrently
    ///
    /// A failed read never aborts the batch: that file is classified as
    /// unknown and its error is recorded on its inspection.
    pub async fn execute(&self, sources: Vec<Arc<dyn PrefixSource>>) -> BatchReport {
        let start_time = Instant::now();
        let prefix_len = self.options.prefix_len;
        let limiter = self
            .options
            .max_concurrent_reads
            .map(|limit| Arc::new(Semaphore::new(limit)));

        tracing::info!(
            "Inspecting {} files ({} byte prefixes)",
            sources.len(),
            prefix_len
        );

        // Every read is spawned up front; the limiter only gates the blocking
        // section. Handles are awaited in input order, so each result lands
        // in its originating slot whichever read finishes first.
        let mut handles = Vec::with_capacity(sources.len());
        for source in &sources {
            let source = Arc::clone(source);
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                let _permit = match limiter {
                    Some(limiter) => limiter.acquire_owned().await.ok(),
                    None => None,
                };
                match tokio::task::spawn_blocking(move || source.read_prefix(prefix_len)).await {
                    Ok(Ok(prefix)) => Ok(prefix),
                    Ok(Err(e)) => Err(e.to_string()),
                    Err(e) => Err(format!("read task failed: {}", e)),
                }
            }));
        }

        let mut files = Vec::with_capacity(sources.len());
        for (source, handle) in sources.iter().zip(handles) {
            let read = handle
                .await
                .unwrap_or_else(|e| Err(format!("read task failed: {}", e)));
            files.push(self.inspect_read(source.as_ref(), read));
        }

        let report = BatchReport::new(files);
        tracing::info!(
            "{} in {:.2}s",
            report.summary(),
            start_time.elapsed().as_secs_f64()
        );
        report
    }

    fn inspect_read(
        &self,
        source: &dyn PrefixSource,
        read: Result<Vec<u8>, String>,
    ) -> FileInspection {
        match read {
            Ok(prefix) => {
                self.inspect_prefix(source.identity().clone(), source.declared_type(), &prefix)
            }
            Err(error) => {
                tracing::warn!(file = %source.identity(), "Could not sniff file: {}", error);
                let mut inspection =
                    self.inspect_prefix(source.identity().clone(), source.declared_type(), &[]);
                inspection.read_error = Some(error);
                inspection
            }
        }
    }
}

impl Default for InspectFilesUseCase {
    fn default() -> Self {
        Self {
            classifier: Classifier::default(),
            evaluator: MismatchEvaluator::default(),
            options: SniffOptions::default(),
        }
    }
}
