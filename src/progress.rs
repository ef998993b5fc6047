use std::{
    sync::{Arc, PoisonError, RwLock},
    thread,
    time::Duration,
};

use crossbeam::channel::{unbounded, Receiver, Sender};
use thiserror::Error;

use crate::core::Coord;

/// Returned by an [`Observer`] that wants the running algorithm to stop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Interrupted")]
pub struct Interrupted;

/// Receives every incremental change of the grid made by a search or a generator.
///
/// `coords` are the cells that changed (visited cell, carved wall, found path, chosen exit) and
/// `delay` is the pacing the caller configured for this step. The observer decides whether to
/// honor it, see [`Paced`].
pub trait Observer {
    fn notify(&mut self, coords: &[Coord], delay: Duration) -> Result<(), Interrupted>;
}

impl<F> Observer for F
where
    F: FnMut(&[Coord], Duration) -> Result<(), Interrupted>,
{
    fn notify(&mut self, coords: &[Coord], delay: Duration) -> Result<(), Interrupted> {
        self(coords, delay)
    }
}

/// Thin wrapper the algorithms report through, so that a missing observer costs nothing.
pub(crate) struct Reporter<'a> {
    observer: Option<&'a mut dyn Observer>,
    delay: Duration,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(observer: Option<&'a mut dyn Observer>, delay: Duration) -> Self {
        Self { observer, delay }
    }

    /// Intermediate step, paced with the configured delay.
    pub(crate) fn step(&mut self, coords: &[Coord]) -> Result<(), Interrupted> {
        match self.observer.as_mut() {
            Some(observer) => observer.notify(coords, self.delay),
            None => Ok(()),
        }
    }

    /// Final result of a run, never paced.
    pub(crate) fn finish(&mut self, coords: &[Coord]) -> Result<(), Interrupted> {
        match self.observer.as_mut() {
            Some(observer) => observer.notify(coords, Duration::ZERO),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Flag(Arc<RwLock<bool>>);

impl Flag {
    pub fn new() -> Self {
        Flag(Arc::new(RwLock::new(false)))
    }

    pub fn stop(&self) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = true;
    }

    pub fn is_stopped(&self) -> bool {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Flag {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleeps for the requested delay after the inner observer handled the change.
#[derive(Debug)]
pub struct Paced<O> {
    inner: O,
}

impl<O: Observer> Paced<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: Observer> Observer for Paced<O> {
    fn notify(&mut self, coords: &[Coord], delay: Duration) -> Result<(), Interrupted> {
        self.inner.notify(coords, delay)?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(())
    }
}

/// Keeps every notification, mostly useful for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub steps: Vec<Vec<Coord>>,
    pub delays: Vec<Duration>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&[Coord]> {
        self.steps.last().map(Vec::as_slice)
    }

    /// All reported coordinates, in order.
    pub fn flatten(&self) -> Vec<Coord> {
        self.steps.iter().flatten().copied().collect()
    }
}

impl Observer for Recorder {
    fn notify(&mut self, coords: &[Coord], delay: Duration) -> Result<(), Interrupted> {
        self.steps.push(coords.to_vec());
        self.delays.push(delay);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub coords: Vec<Coord>,
    pub delay: Duration,
}

/// Forwards updates to another thread, which can stop the run using the shared [`Flag`].
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: Sender<Update>,
    flag: Flag,
}

impl ChannelObserver {
    pub fn flag(&self) -> &Flag {
        &self.flag
    }
}

impl Observer for ChannelObserver {
    fn notify(&mut self, coords: &[Coord], delay: Duration) -> Result<(), Interrupted> {
        if self.flag.is_stopped() {
            return Err(Interrupted);
        }

        // receiver is gone, nobody is watching anymore
        self.sender
            .send(Update {
                coords: coords.to_vec(),
                delay,
            })
            .map_err(|_| Interrupted)
    }
}

pub fn channel() -> (ChannelObserver, Receiver<Update>, Flag) {
    let (sender, receiver) = unbounded();
    let flag = Flag::new();
    (
        ChannelObserver {
            sender,
            flag: flag.clone(),
        },
        receiver,
        flag,
    )
}
