//! One-shot signal between exactly two threads.
//!
//! A [`SignalGate`] splits into a [`Notifier`] and a [`Listener`]. The
//! listener blocks in [`Listener::wait`] until the notifier signals. The
//! signal is latched, so notifying before the listener waits is not lost.
//!
//! [`Notifier::hold`] adds a rendezvous on top: it blocks until the listener
//! is actually waiting and then keeps the gate locked until the returned
//! [`GateGuard`] is dropped. The listener can only resume after that.

use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use crate::{Result, SyncError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaiterState {
    Idle,
    Waiting,
    Signaled,
    Resumed,
}

struct GateState {
    waiter: WaiterState,
    notifier_alive: bool,
    listener_alive: bool,
}

impl GateState {
    fn signal(&mut self) {
        if let WaiterState::Idle | WaiterState::Waiting = self.waiter {
            self.waiter = WaiterState::Signaled;
        }
    }
}

struct SignalGateImpl {
    state: Mutex<GateState>,
    condition: Condvar,
}

impl SignalGateImpl {
    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct SignalGate {
    inner: Arc<SignalGateImpl>,
}

impl SignalGate {
    pub fn new() -> Self {
        SignalGate {
            inner: Arc::new(SignalGateImpl {
                state: Mutex::new(GateState {
                    waiter: WaiterState::Idle,
                    notifier_alive: true,
                    listener_alive: true,
                }),
                condition: Condvar::new(),
            }),
        }
    }

    pub fn split(self) -> (Notifier, Listener) {
        let notifier = Notifier {
            inner: Arc::clone(&self.inner),
        };
        let listener = Listener { inner: self.inner };
        (notifier, listener)
    }
}

impl Default for SignalGate {
    fn default() -> Self {
        SignalGate::new()
    }
}

pub struct Notifier {
    inner: Arc<SignalGateImpl>,
}

impl Notifier {
    /// Waits until the listener is blocked in [`Listener::wait`], then
    /// returns with the gate locked.
    ///
    /// Fails with [`SyncError::ListenerDropped`] if the listener goes away
    /// without ever waiting.
    pub fn hold(&mut self) -> Result<GateGuard<'_>> {
        let state = self.inner.lock();
        let state = self
            .inner
            .condition
            .wait_while(state, |state| {
                state.waiter == WaiterState::Idle && state.listener_alive
            })
            .unwrap_or_else(PoisonError::into_inner);
        if state.waiter == WaiterState::Idle {
            return Err(SyncError::ListenerDropped);
        }
        Ok(GateGuard {
            state,
            condition: &self.inner.condition,
        })
    }

    /// Signals without a rendezvous. If nobody waits yet the signal is kept
    /// for the next [`Listener::wait`].
    pub fn notify(self) {
        {
            let mut state = self.inner.lock();
            state.signal();
        }
        self.inner.condition.notify_all();
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        let mut state = self.inner.lock();
        state.notifier_alive = false;
        self.inner.condition.notify_all();
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = self.inner.lock();
        write!(f, "Notifier {{ waiter {:?} }}", state.waiter)
    }
}

/// The gate's lock, held by the notifier between [`Notifier::hold`] and
/// drop. The listener cannot resume while this exists.
pub struct GateGuard<'a> {
    state: MutexGuard<'a, GateState>,
    condition: &'a Condvar,
}

impl GateGuard<'_> {
    pub fn notify(&mut self) {
        self.state.signal();
        self.condition.notify_all();
    }

    pub fn waiter(&self) -> WaiterState {
        self.state.waiter
    }
}

pub struct Listener {
    inner: Arc<SignalGateImpl>,
}

impl Listener {
    pub fn state(&self) -> WaiterState {
        self.inner.lock().waiter
    }

    /// Blocks until signaled: `Waiting -> Signaled -> Resumed`.
    ///
    /// Returns immediately once resumed. Fails with
    /// [`SyncError::NotifierDropped`] if the notifier is dropped without
    /// signaling.
    pub fn wait(&mut self) -> Result<()> {
        let mut state = self.inner.lock();
        if state.waiter == WaiterState::Resumed {
            return Ok(());
        }
        if state.waiter == WaiterState::Idle {
            state.waiter = WaiterState::Waiting;
            self.inner.condition.notify_all();
        }
        let mut state = self
            .inner
            .condition
            .wait_while(state, |state| {
                state.waiter == WaiterState::Waiting && state.notifier_alive
            })
            .unwrap_or_else(PoisonError::into_inner);
        if state.waiter != WaiterState::Signaled {
            return Err(SyncError::NotifierDropped);
        }
        state.waiter = WaiterState::Resumed;
        Ok(())
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let mut state = self.inner.lock();
        state.listener_alive = false;
        self.inner.condition.notify_all();
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Listener {{ waiter {:?} }}", self.state())
    }
}
