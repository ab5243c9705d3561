//! Background analysis thread.
//!
//! Frames are analyzed strictly in submission order by a single thread that
//! owns the [`CourtAnalyzer`]; results come back over a channel. Bounce
//! history snapshots in the results are immutable, so the caller can read
//! them while later frames are still being processed.
use crate::analyzer::{CourtAnalyzer, FrameAnalysis};
use crate::detection::BoundingBox;
use crate::image::RgbFrame;
use log::{debug, warn};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct FrameJob {
    pub frame: RgbFrame,
    pub detection: Option<BoundingBox>,
    pub fps: f32,
}

pub struct WorkerOutput {
    pub analysis: FrameAnalysis,
    /// Marked-up copy of the frame when annotation is enabled.
    pub annotated: Option<RgbFrame>,
}

pub struct AnalysisWorker {
    jobs: Option<Sender<FrameJob>>,
    results: Receiver<WorkerOutput>,
    handle: Option<JoinHandle<CourtAnalyzer>>,
}

impl AnalysisWorker {
    pub fn spawn(analyzer: CourtAnalyzer) -> Result<Self, String> {
        let (job_tx, job_rx) = mpsc::channel::<FrameJob>();
        let (out_tx, out_rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("court-analysis".into())
            .spawn(move || run(analyzer, job_rx, out_tx))
            .map_err(|e| format!("Failed to spawn analysis thread: {e}"))?;
        Ok(Self {
            jobs: Some(job_tx),
            results: out_rx,
            handle: Some(handle),
        })
    }

    pub fn submit(&self, job: FrameJob) -> Result<(), String> {
        let jobs = self
            .jobs
            .as_ref()
            .ok_or_else(|| "Analysis worker is shut down".to_string())?;
        jobs.send(job)
            .map_err(|_| "Analysis worker stopped unexpectedly".to_string())
    }

    /// Block until the next result. `None` once the worker has exited and
    /// every result was drained.
    pub fn recv(&self) -> Option<WorkerOutput> {
        self.results.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<WorkerOutput>, String> {
        match self.results.recv_timeout(timeout) {
            Ok(out) => Ok(Some(out)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err("Analysis worker disconnected".to_string())
            }
        }
    }

    pub fn try_recv(&self) -> Option<WorkerOutput> {
        match self.results.try_recv() {
            Ok(out) => Some(out),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Stop accepting frames, wait for queued ones to finish and hand back
    /// the analyzer with its final session state plus any unread results.
    pub fn shutdown(mut self) -> Result<(CourtAnalyzer, Vec<WorkerOutput>), String> {
        self.jobs.take();
        let handle = self
            .handle
            .take()
            .ok_or_else(|| "Analysis worker already joined".to_string())?;
        let analyzer = handle
            .join()
            .map_err(|_| "Analysis thread panicked".to_string())?;
        let pending = self.results.try_iter().collect();
        Ok((analyzer, pending))
    }
}

impl Drop for AnalysisWorker {
    fn drop(&mut self) {
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("analysis thread panicked during drop");
            }
        }
    }
}

fn run(
    mut analyzer: CourtAnalyzer,
    jobs: Receiver<FrameJob>,
    results: Sender<WorkerOutput>,
) -> CourtAnalyzer {
    for job in jobs {
        let analysis = analyzer.analyze_frame(job.frame.as_view(), job.detection, job.fps);
        let annotated = analyzer.params().annotate.then(|| {
            let mut frame = job.frame;
            analyzer.annotate(&mut frame, &analysis);
            frame
        });
        if results.send(WorkerOutput { analysis, annotated }).is_err() {
            debug!("result receiver dropped; stopping analysis thread");
            break;
        }
    }
    analyzer
}
