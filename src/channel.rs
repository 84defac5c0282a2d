//! Portable bounded channel for `no_std` environments.
//!
//! A simple SPSC-style (but multi-sender safe) channel built on `critical-section`
//! and `heapless::Deque`. Used to hand engine inputs to a renderer that runs
//! its own loop.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::engine::{AnimationInputs, EngineInput};

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe channel.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Try to send a value into the channel.
    ///
    /// Returns `Err(TrySendError(value))` if the channel is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    /// Send a value, evicting the oldest queued value if the channel is full.
    ///
    /// Returns the evicted value, if any.
    pub fn send_overwrite(&self, value: T) -> Option<T> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let evicted = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            // Capacity zero cannot hold anything; hand the value back
            match queue.push_back(value) {
                Ok(()) => evicted,
                Err(value) => Some(value),
            }
        })
    }

    /// Try to receive a value from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Try to send a value into the channel.
    ///
    /// Returns `Err(TrySendError(value))` if the channel is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }

    /// Send a value, evicting the oldest queued value if the channel is full.
    pub fn send_overwrite(&self, value: T) -> Option<T> {
        self.channel.send_overwrite(value)
    }
}

/// A receiver handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Try to receive a value from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Type alias for the engine input channel
pub type InputChannel<const SIZE: usize> = Channel<EngineInput, SIZE>;

/// Type alias for engine input sender
pub type InputSender<'a, const SIZE: usize> = Sender<'a, EngineInput, SIZE>;

/// Type alias for engine input receiver
pub type InputReceiver<'a, const SIZE: usize> = Receiver<'a, EngineInput, SIZE>;

/// Queues engine writes instead of applying them
///
/// A full queue drops its oldest write, so the latest writes always reach
/// the engine. With room for two inputs a power transition is never lost.
impl<const SIZE: usize> AnimationInputs for Sender<'_, EngineInput, SIZE> {
    fn set_color_value(&mut self, value: f32) {
        self.send_overwrite(EngineInput::ColorValue(value));
    }

    fn set_power(&mut self, on: bool) {
        self.send_overwrite(EngineInput::Power(on));
    }
}

impl<const SIZE: usize> Receiver<'_, EngineInput, SIZE> {
    /// Apply all pending inputs to the engine (non-blocking)
    ///
    /// Returns the number of inputs applied.
    pub fn drain_into<E: AnimationInputs>(&self, engine: &mut E) -> usize {
        let mut applied = 0;
        while let Ok(input) = self.try_receive() {
            input.apply(engine);
            applied += 1;
        }
        applied
    }
}
