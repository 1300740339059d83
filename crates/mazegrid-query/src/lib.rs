//! **mazegrid-query** — worker-thread dispatch for interactive path queries.
//!
//! Interactive callers (one shortest-path query per pointer-movement event)
//! must not block their event thread, and a fast burst of queries must not
//! render a stale path after a fresher one. [`QueryPool`] solves both:
//! queries run on a dedicated worker thread, each tagged with a
//! monotonically increasing sequence number, and newer queries supersede
//! older in-flight ones — the worker skips ahead to the newest queued job
//! before computing, and [`QueryPool::poll`] discards any result whose
//! sequence number is not the latest issued.
//!
//! The grid travels to the worker as an [`Arc<Grid>`] snapshot. Callers
//! regenerate by replacing the `Arc`, never by mutating a grid a worker may
//! still be reading.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::{debug, trace};
use mazegrid_core::{Cell, Grid, GridError};
use mazegrid_paths::MazePaths;

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

// ---------------------------------------------------------------------------
// QueryPool
// ---------------------------------------------------------------------------

struct Job {
    seq: u64,
    grid: Arc<Grid>,
    start: Cell,
    end: Cell,
}

/// The outcome of one dispatched shortest-path query.
#[derive(Debug)]
pub struct QueryResult {
    /// Sequence number of the query this result answers.
    pub seq: u64,
    /// The search outcome: a path, `None` for disconnected endpoints, or a
    /// boundary-violation error reported back from the worker.
    pub outcome: Result<Option<Vec<Cell>>, GridError>,
}

/// Dispatches shortest-path queries to a worker thread with
/// supersede-by-sequence-number semantics.
pub struct QueryPool {
    jobs: Option<Sender<Job>>,
    results: Receiver<QueryResult>,
    ctx: Context,
    last_seq: u64,
    worker: Option<JoinHandle<()>>,
}

impl QueryPool {
    /// Spawn the worker thread.
    pub fn new() -> std::io::Result<Self> {
        let (jtx, jrx) = mpsc::channel::<Job>();
        let (rtx, rrx) = mpsc::channel::<QueryResult>();
        let ctx = Context::new();
        let worker_ctx = ctx.clone();
        let worker = thread::Builder::new()
            .name("mazegrid-query".into())
            .spawn(move || worker_loop(worker_ctx, jrx, rtx))?;
        Ok(Self {
            jobs: Some(jtx),
            results: rrx,
            ctx,
            last_seq: 0,
            worker: Some(worker),
        })
    }

    /// Issue a query against a grid snapshot and return its sequence number.
    ///
    /// The sequence number is strictly increasing; an earlier query still in
    /// flight is superseded and its result will be discarded.
    pub fn submit(&mut self, grid: &Arc<Grid>, start: Cell, end: Cell) -> u64 {
        self.last_seq += 1;
        let job = Job {
            seq: self.last_seq,
            grid: Arc::clone(grid),
            start,
            end,
        };
        if let Some(jobs) = &self.jobs {
            jobs.send(job).ok();
        }
        self.last_seq
    }

    /// Sequence number of the most recently issued query (0 before any).
    #[inline]
    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    /// Non-blocking: drain ready results and return the one answering the
    /// latest issued query, if it has arrived. Stale results are discarded.
    pub fn poll(&mut self) -> Option<QueryResult> {
        let mut latest = None;
        while let Ok(res) = self.results.try_recv() {
            if res.seq == self.last_seq {
                latest = Some(res);
            } else {
                trace!("discarding stale result for query {}", res.seq);
            }
        }
        latest
    }

    /// Block until the result of the latest issued query arrives.
    ///
    /// Returns `None` only if the worker has gone away. Stale results are
    /// discarded along the way.
    pub fn recv_latest(&mut self) -> Option<QueryResult> {
        while let Ok(res) = self.results.recv() {
            if res.seq == self.last_seq {
                return Some(res);
            }
            trace!("discarding stale result for query {}", res.seq);
        }
        None
    }
}

impl Drop for QueryPool {
    fn drop(&mut self) {
        self.ctx.cancel();
        // Closing the job channel unblocks the worker's recv.
        self.jobs.take();
        if let Some(worker) = self.worker.take() {
            worker.join().ok();
        }
    }
}

fn worker_loop(ctx: Context, jobs: Receiver<Job>, results: Sender<QueryResult>) {
    debug!("query worker started");
    let mut paths = MazePaths::new();

    while let Ok(mut job) = jobs.recv() {
        if ctx.is_done() {
            break;
        }
        // Skip ahead to the newest queued job; the ones in between are
        // already superseded and not worth computing.
        while let Ok(newer) = jobs.try_recv() {
            trace!("query {} superseded by {}", job.seq, newer.seq);
            job = newer;
        }

        let outcome = paths.shortest_path(&job.grid, job.start, job.end);
        if results
            .send(QueryResult {
                seq: job.seq,
                outcome,
            })
            .is_err()
        {
            break;
        }
    }
    debug!("query worker stopped");
}
