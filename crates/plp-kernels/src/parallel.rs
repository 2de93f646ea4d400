//! Fan-out of one kernel over a fixed set of workers.
//!
//! Uses `std::thread::scope`: the worker set is sized once per call, the
//! caller's thread doubles as worker 0, and returning from [`fork`] is the
//! join after which the output may be read.

use crate::isa::{CoreKind, Environment};
use crate::partition::Worker;

impl Worker {
    /// The worker an environment's identity and core-count queries describe.
    pub fn of<E: Environment + ?Sized>(env: &E) -> Self {
        Worker::new(env.core_id(), env.num_cores())
    }
}

impl Environment for Worker {
    fn core_kind(&self) -> CoreKind {
        CoreKind::Cluster
    }

    fn core_id(&self) -> usize {
        self.id
    }

    fn num_cores(&self) -> usize {
        self.count
    }
}

/// Run `work` once per worker, each call receiving its own input.
///
/// `inputs` yields exactly one item per worker in id order; item `i` is
/// moved into the call for worker `i` of `inputs.len()`.
pub fn fork<I, F>(inputs: Vec<I>, work: F)
where
    I: Send,
    F: Fn(Worker, I) + Sync,
{
    let count = inputs.len();
    if count == 0 {
        return;
    }
    log::debug!("fork: {} workers", count);

    let mut inputs = inputs.into_iter().enumerate();
    let (_, first) = match inputs.next() {
        Some(first) => first,
        None => return,
    };
    if count == 1 {
        work(Worker::single(), first);
        return;
    }

    let work = &work;
    std::thread::scope(|s| {
        for (id, input) in inputs {
            s.spawn(move || work(Worker::new(id, count), input));
        }
        work(Worker::new(0, count), first);
    });
}
