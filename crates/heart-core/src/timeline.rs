//! Cancellable one-shot timers keyed to the scene clock.
//!
//! Deadlines are absolute clock values in seconds, so a timer fires on the
//! first poll at or after its deadline no matter how many frames that took.
//! After [`Timeline::dispose`] nothing is scheduled and nothing fires.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

#[derive(Clone, Debug)]
struct Pending<E> {
    id: TimerId,
    deadline: f64,
    event: E,
}

#[derive(Clone, Debug)]
pub struct Timeline<E> {
    pending: SmallVec<[Pending<E>; 8]>,
    next_id: u32,
    disposed: bool,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            pending: SmallVec::new(),
            next_id: 0,
            disposed: false,
        }
    }
}

impl<E: Clone> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire `delay_sec` after `now`. Returns `None` once disposed.
    pub fn schedule(&mut self, now: f64, delay_sec: f64, event: E) -> Option<TimerId> {
        if self.disposed {
            return None;
        }
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(Pending {
            id,
            deadline: now + delay_sec.max(0.0),
            event,
        });
        Some(id)
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Remove and return every event due at `now`, earliest deadline first.
    pub fn poll(&mut self, now: f64, out: &mut Vec<E>) {
        if self.disposed {
            return;
        }
        let mut due: SmallVec<[Pending<E>; 8]> = SmallVec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].deadline <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.deadline.total_cmp(&b.deadline));
        out.extend(due.into_iter().map(|p| p.event));
    }

    pub fn dispose(&mut self) {
        if !self.disposed {
            log::debug!("[timeline] dispose with {} pending", self.pending.len());
        }
        self.pending.clear();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
