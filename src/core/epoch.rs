use std::cell::Cell;
use std::rc::Rc;

/// Shared counter used to discard delayed work superseded by a newer event.
///
/// Every scheduled callback captures a [`Ticket`]; advancing the epoch
/// invalidates all tickets issued before.
#[derive(Clone, Debug, Default)]
pub struct Epoch(Rc<Cell<u64>>);

#[derive(Clone, Debug)]
pub struct Ticket {
    epoch: Epoch,
    value: u64,
}

impl Epoch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation and return its ticket.
    pub fn advance(&self) -> Ticket {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        Ticket {
            epoch: self.clone(),
            value: next,
        }
    }

    /// Ticket for the current generation without invalidating anything.
    #[cfg(test)]
    pub fn ticket(&self) -> Ticket {
        Ticket {
            epoch: self.clone(),
            value: self.0.get(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.0.get()
    }
}

impl Ticket {
    #[inline]
    pub fn is_current(&self) -> bool {
        self.epoch.0.get() == self.value
    }
}
