//! Delayed tick delivery.
//!
//! A timer thread keeps pending `(deadline, generation)` requests in a
//! min-heap and pushes `GameEvent::Tick` into the game's event channel as
//! each deadline passes. Requests are never cancelled; a restart makes
//! old ones stale and the reducer drops them on arrival.

use crate::runner::GameEvent;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

struct TickRequest {
    deadline: Instant,
    generation: u64,
}

pub struct Scheduler {
    requests: Sender<TickRequest>,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Start the timer thread. Ticks are sent on `events`.
    pub fn spawn(events: Sender<GameEvent>) -> io::Result<Self> {
        let (requests, rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("tick-scheduler".to_string())
            .spawn(move || run_timer(rx, events))?;
        Ok(Self {
            requests,
            handle: Some(handle),
        })
    }

    /// Deliver `Tick { generation }` once `after` has elapsed.
    pub fn schedule(&self, after: Duration, generation: u64) -> io::Result<()> {
        let request = TickRequest {
            deadline: Instant::now() + after,
            generation,
        };
        self.requests
            .send(request)
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "tick scheduler stopped"))
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        // Swap in a dead sender so the thread sees a disconnect
        let (closed, _) = mpsc::channel();
        self.requests = closed;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_timer(rx: Receiver<TickRequest>, events: Sender<GameEvent>) {
    // Sequence number keeps requests with equal deadlines in FIFO order
    let mut pending: BinaryHeap<Reverse<(Instant, u64, u64)>> = BinaryHeap::new();
    let mut seq = 0u64;

    loop {
        let now = Instant::now();
        while let Some(Reverse((deadline, _, generation))) = pending.peek().copied() {
            if deadline > now {
                break;
            }
            pending.pop();
            if events.send(GameEvent::Tick { generation }).is_err() {
                return;
            }
        }

        let received = match pending.peek() {
            Some(Reverse((deadline, _, _))) => {
                rx.recv_timeout(deadline.saturating_duration_since(now))
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(request) => {
                pending.push(Reverse((request.deadline, seq, request.generation)));
                seq += 1;
            }
            Err(RecvTimeoutError::Timeout) => {}
            // Scheduler dropped: the game is shutting down
            Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}
