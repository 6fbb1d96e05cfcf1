//! Timed playback of a solved path.
//!
//! The animator never sleeps. The host event loop calls [`PathAnimator::poll`] whenever it wakes
//! up, using [`PathAnimator::next_due`] as its poll deadline, and the animator performs at most
//! one step per call.

use std::time::{Duration, Instant};

use crate::{maze::Cell, session::PlayerSession, solvers::Path};

/// Status reported by a single poll of the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// The next step is not due yet
    Waiting,
    /// The player was moved to the given cell and more steps remain
    Stepped(Cell),
    /// The whole path was replayed and the goal was checked
    Finished { goal_reached: bool },
    /// Playback was cancelled before the end of the path
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Playing { next_due: Instant },
    Finished { goal_reached: bool },
    Cancelled,
}

/// Replays a path on a session, one cell per `step_delay`.
#[derive(Debug)]
pub struct PathAnimator {
    path: Path,
    /// Index of the next cell to place
    index: usize,
    step_delay: Duration,
    state: State,
}

impl PathAnimator {
    /// Schedule playback of `path`. The first cell is due immediately.
    pub fn play(path: Path, step_delay: Duration) -> Self {
        tracing::debug!(
            "[animate] Playing {} cells every {:?}",
            path.len(),
            step_delay
        );
        PathAnimator {
            path,
            index: 0,
            step_delay,
            state: State::Playing {
                next_due: Instant::now(),
            },
        }
    }

    /// When the next step should run, or `None` once playback is over.
    pub fn next_due(&self) -> Option<Instant> {
        match self.state {
            State::Playing { next_due } => Some(next_due),
            State::Finished { .. } | State::Cancelled => None,
        }
    }

    /// Stop playback. The session keeps whatever position was last placed.
    pub fn cancel(&mut self) {
        if let State::Playing { .. } = self.state {
            tracing::debug!(
                "[animate] Cancelled after {} of {} cells",
                self.index,
                self.path.len()
            );
            self.state = State::Cancelled;
        }
    }

    /// Run the next step if it is due at `now`.
    ///
    /// `on_step` is called with the new position after every placed cell. The goal is checked in
    /// the same call that places the last cell, not one `step_delay` later, so the poll that moves
    /// the player onto the end reports `Finished`. An empty path finishes on the first poll.
    pub fn poll<F>(&mut self, now: Instant, session: &mut PlayerSession, mut on_step: F) -> AnimationStatus
    where
        F: FnMut(Cell),
    {
        let next_due = match self.state {
            State::Playing { next_due } => next_due,
            State::Finished { goal_reached } => return AnimationStatus::Finished { goal_reached },
            State::Cancelled => return AnimationStatus::Cancelled,
        };
        if now < next_due {
            return AnimationStatus::Waiting;
        }

        if let Some(&cell) = self.path.cells().get(self.index) {
            session.place(cell);
            on_step(cell);
            self.index += 1;
            if self.index < self.path.len() {
                self.state = State::Playing {
                    next_due: now + self.step_delay,
                };
                return AnimationStatus::Stepped(cell);
            }
        }

        let goal_reached = session.check_goal();
        tracing::debug!("[animate] Playback finished, goal reached: {}", goal_reached);
        self.state = State::Finished { goal_reached };
        AnimationStatus::Finished { goal_reached }
    }

    /// Play every remaining step immediately, ignoring the step delay.
    pub fn run_to_end<F>(&mut self, session: &mut PlayerSession, mut on_step: F) -> AnimationStatus
    where
        F: FnMut(Cell),
    {
        loop {
            let Some(due) = self.next_due() else {
                return self.poll(Instant::now(), session, &mut on_step);
            };
            match self.poll(due, session, &mut on_step) {
                AnimationStatus::Waiting | AnimationStatus::Stepped(_) => continue,
                status => return status,
            }
        }
    }
}
