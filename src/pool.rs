// Worker pool
//
// A fixed set of threads draining one bounded queue. Producers push under
// the mutex and signal the condition variable; workers wait on it, pop, and
// run the task outside the lock. A full queue never blocks the producer:
// the task runs inline on the submitting thread instead. Teardown pushes
// one shutdown sentinel per worker (ignoring the capacity bound) and joins
// them all.
//
// `WorkerPool::inline()` is the degenerate pool with no threads at all;
// every submitted task runs on the caller. Searches through it are
// deterministic, which is what the tests want.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use log::debug;

/// Bounded queue capacity; overflow runs inline on the producer.
pub const QUEUE_CAPACITY: usize = 256;

/// Environment variable overriding the detected worker count.
pub const NPROC_ENV: &str = "CHESS_NPROC";

type Task = Box<dyn FnOnce() + Send + 'static>;

enum Job {
    Run(Task),
    Shutdown,
}

struct Shared {
    queue: Mutex<VecDeque<Job>>,
    ready: Condvar,
}

pub struct WorkerPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Pool sized to `CHESS_NPROC` if set, else the logical CPU count.
    pub fn new() -> Self {
        Self::with_threads(worker_count())
    }

    /// Pool with no threads: every task runs inline on the submitter.
    pub fn inline() -> Self {
        Self::with_threads(0)
    }

    pub fn with_threads(count: usize) -> Self {
        let shared = Arc::new(Shared {
            queue: Mutex::new(VecDeque::with_capacity(QUEUE_CAPACITY)),
            ready: Condvar::new(),
        });
        let workers = (0..count)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || worker_loop(shared))
            })
            .collect();
        debug!("worker pool started with {count} thread(s)");
        Self { shared, workers }
    }

    pub fn is_inline(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn submit(&self, task: impl FnOnce() + Send + 'static) {
        if self.is_inline() {
            task();
            return;
        }
        {
            let mut queue = self.shared.queue.lock().expect("worker queue mutex poisoned");
            if queue.len() < QUEUE_CAPACITY {
                queue.push_back(Job::Run(Box::new(task)));
                self.shared.ready.notify_one();
                return;
            }
        }
        // Queue full: run on this thread rather than block the caller.
        task();
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        {
            let mut queue = self.shared.queue.lock().expect("worker queue mutex poisoned");
            for _ in &self.workers {
                queue.push_back(Job::Shutdown);
            }
        }
        self.shared.ready.notify_all();
        for worker in self.workers.drain(..) {
            worker.join().expect("worker thread panicked");
        }
    }
}

fn worker_loop(shared: Arc<Shared>) {
    loop {
        let job = {
            let mut queue = shared.queue.lock().expect("worker queue mutex poisoned");
            loop {
                if let Some(job) = queue.pop_front() {
                    break job;
                }
                queue = shared.ready.wait(queue).expect("worker queue mutex poisoned");
            }
        };
        match job {
            Job::Run(task) => task(),
            Job::Shutdown => break,
        }
    }
}

/// Worker count: `CHESS_NPROC` when set to a positive integer, otherwise
/// the logical CPU count, never less than one.
pub fn worker_count() -> usize {
    if let Ok(value) = std::env::var(NPROC_ENV) {
        if let Ok(count) = value.parse::<usize>() {
            if count > 0 {
                return count;
            }
        }
    }
    num_cpus::get().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_all_submitted_tasks_run() {
        let pool = WorkerPool::with_threads(4);
        let counter = Arc::new(AtomicUsize::new(0));
        for _ in 0..100 {
            let counter = Arc::clone(&counter);
            pool.submit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        drop(pool);
        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn test_inline_pool_runs_on_caller() {
        let pool = WorkerPool::inline();
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&counter);
        pool.submit(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        // No waiting: the task already ran on this thread.
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slow_tasks_do_not_block_submission() {
        let pool = WorkerPool::with_threads(2);
        let counter = Arc::new(AtomicUsize::new(0));
        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            pool.submit(move || {
                thread::sleep(Duration::from_millis(10));
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        drop(pool);
        assert_eq!(counter.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn test_shutdown_joins_idle_workers() {
        let pool = WorkerPool::with_threads(3);
        // Dropping a pool that never ran a task must not hang.
        drop(pool);
    }
}
