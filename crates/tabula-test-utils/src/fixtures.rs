//! Cell types that record their own lifecycle.

use std::cell::Cell;
use std::rc::Rc;

/// Shared tally of live [`DropProbe`] values.
///
/// Clone the counter into every probe; [`live`](DropCounter::live)
/// reports how many probes have not yet been dropped.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    live: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe tracked by this counter.
    pub fn probe(&self, value: i32) -> DropProbe {
        self.live.set(self.live.get() + 1);
        DropProbe {
            value,
            counter: Some(self.clone()),
        }
    }

    /// Probes created and not yet dropped.
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

/// A cell value that decrements its counter when dropped.
///
/// The default probe is untracked, so defaulted cells never affect the
/// tally.
#[derive(Debug, Default)]
pub struct DropProbe {
    pub value: i32,
    counter: Option<DropCounter>,
}

impl DropProbe {
    /// `true` if this probe is counted.
    pub fn is_tracked(&self) -> bool {
        self.counter.is_some()
    }
}

impl Clone for DropProbe {
    fn clone(&self) -> Self {
        match &self.counter {
            Some(counter) => counter.probe(self.value),
            None => Self {
                value: self.value,
                counter: None,
            },
        }
    }
}

impl PartialEq for DropProbe {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.is_tracked() == other.is_tracked()
    }
}

impl Drop for DropProbe {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter.live.set(counter.live.get() - 1);
        }
    }
}
