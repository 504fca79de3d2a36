//! Export execution.
//!
//! `ExportRunner` produces one file per call under a deadline; independent
//! callers run concurrently. `ExportQueue` is a worker owned by one session that
//! finishes each job before taking the next, and `export_package` on either type
//! completes the resume before starting the cover letter.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{DocumentExporter, ExportDocument, ExportError, ExportFormat, ExportedFile};

const QUEUE_CAPACITY: usize = 32;

/// Deadline for a single export when none is configured.
pub const DEFAULT_EXPORT_TIMEOUT: Duration = Duration::from_secs(60);

type ExportReply = oneshot::Sender<Result<ExportedFile, ExportError>>;

struct ExportJob {
    id: Uuid,
    document: ExportDocument,
    reply: ExportReply,
}

/// Resume and cover letter exported together.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPackage {
    pub resume: Option<ExportedFile>,
    pub cover_letter: Option<ExportedFile>,
}

/// Shared exporter plus the per-export deadline.
#[derive(Clone)]
pub struct ExportRunner {
    exporter: Arc<dyn DocumentExporter>,
    timeout: Duration,
}

impl ExportRunner {
    pub fn new(exporter: Arc<dyn DocumentExporter>) -> Self {
        Self {
            exporter,
            timeout: DEFAULT_EXPORT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn format(&self) -> ExportFormat {
        self.exporter.format()
    }

    /// Exports one document. `Ok(None)` when there is nothing to export.
    pub async fn export_to_file(
        &self,
        document: Option<ExportDocument>,
    ) -> Result<Option<ExportedFile>, ExportError> {
        match document {
            Some(document) => Ok(Some(self.run(Uuid::new_v4(), document).await?)),
            None => {
                debug!("no render target, skipping export");
                Ok(None)
            }
        }
    }

    /// Exports the resume, then the cover letter once the resume is finished.
    pub async fn export_package(
        &self,
        resume: Option<ExportDocument>,
        cover_letter: Option<ExportDocument>,
    ) -> Result<ExportPackage, ExportError> {
        let resume = self.export_to_file(resume).await?;
        let cover_letter = self.export_to_file(cover_letter).await?;
        Ok(ExportPackage {
            resume,
            cover_letter,
        })
    }

    /// Starts a sequential worker driven by this runner. Must be called inside a
    /// Tokio runtime.
    pub fn queue(&self) -> ExportQueue {
        ExportQueue::spawn(self.clone())
    }

    async fn run(&self, id: Uuid, document: ExportDocument) -> Result<ExportedFile, ExportError> {
        let format = self.format();
        let file_name = document.file_name(format);
        debug!(job_id = %id, %file_name, "export started");

        let result = tokio::time::timeout(self.timeout, self.exporter.export(&document))
            .await
            .unwrap_or_else(|_| Err(ExportError::TimedOut(self.timeout)))
            .map(|bytes| ExportedFile {
                file_name: file_name.clone(),
                content_type: format.content_type(),
                bytes,
            });

        match &result {
            Ok(file) => info!(job_id = %id, %file_name, size = file.bytes.len(), "export finished"),
            Err(e) => warn!(job_id = %id, %file_name, "export failed: {e}"),
        }
        result
    }
}

/// Cloneable handle to a sequential export worker.
#[derive(Clone)]
pub struct ExportQueue {
    jobs: mpsc::Sender<ExportJob>,
    format: ExportFormat,
}

impl ExportQueue {
    pub fn spawn(runner: ExportRunner) -> Self {
        let (jobs, receiver) = mpsc::channel(QUEUE_CAPACITY);
        let format = runner.format();
        tokio::spawn(run_worker(runner, receiver));
        Self { jobs, format }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Exports one document. `Ok(None)` when there is nothing to export.
    pub async fn export_to_file(
        &self,
        document: Option<ExportDocument>,
    ) -> Result<Option<ExportedFile>, ExportError> {
        let Some(document) = document else {
            debug!("no render target, skipping export");
            return Ok(None);
        };
        let pending = self.enqueue(document).await?;
        Ok(Some(pending.await.map_err(|_| ExportError::QueueClosed)??))
    }

    /// Queues the resume, then the cover letter, and waits for both. The cover
    /// letter is only started once the resume is finished.
    pub async fn export_package(
        &self,
        resume: Option<ExportDocument>,
        cover_letter: Option<ExportDocument>,
    ) -> Result<ExportPackage, ExportError> {
        let resume = match resume {
            Some(document) => Some(self.enqueue(document).await?),
            None => None,
        };
        let cover_letter = match cover_letter {
            Some(document) => Some(self.enqueue(document).await?),
            None => None,
        };

        Ok(ExportPackage {
            resume: settle(resume).await?,
            cover_letter: settle(cover_letter).await?,
        })
    }

    async fn enqueue(
        &self,
        document: ExportDocument,
    ) -> Result<oneshot::Receiver<Result<ExportedFile, ExportError>>, ExportError> {
        let (reply, pending) = oneshot::channel();
        let job = ExportJob {
            id: Uuid::new_v4(),
            document,
            reply,
        };
        self.jobs
            .send(job)
            .await
            .map_err(|_| ExportError::QueueClosed)?;
        Ok(pending)
    }
}

async fn settle(
    pending: Option<oneshot::Receiver<Result<ExportedFile, ExportError>>>,
) -> Result<Option<ExportedFile>, ExportError> {
    match pending {
        Some(pending) => Ok(Some(pending.await.map_err(|_| ExportError::QueueClosed)??)),
        None => Ok(None),
    }
}

async fn run_worker(runner: ExportRunner, mut jobs: mpsc::Receiver<ExportJob>) {
    while let Some(ExportJob {
        id,
        document,
        reply,
    }) = jobs.recv().await
    {
        let result = runner.run(id, document).await;
        if reply.send(result).is_err() {
            debug!(job_id = %id, "export requester went away before completion");
        }
    }
    debug!("export queue closed");
}
