// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use lookout_page::{Observer, Timer};
use lookout_visibility::IntersectionSample;

/// A browser callback that arrived while the host could not reach the page.
///
/// Elements stay raw until the page is reachable, since interning needs the
/// host.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Pending<E> {
    Frame(f64),
    Timer(Timer),
    Intersection {
        observer: Observer,
        target: E,
        sample: IntersectionSample,
    },
}

/// Queue shared between host-owned browser callbacks and the page driver.
///
/// Callbacks created inside the host (animation frames, timers, intersection
/// observers) cannot hold the page, which owns the host. They push here and
/// call the wake function, which the driver installs once the page exists.
pub(crate) struct Inbox<E> {
    pending: RefCell<VecDeque<Pending<E>>>,
    wake: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<E> core::fmt::Debug for Inbox<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Inbox")
            .field("pending", &self.pending.borrow().len())
            .field("wake", &self.wake.borrow().is_some())
            .finish()
    }
}

impl<E> Inbox<E> {
    pub(crate) fn new() -> Self {
        Self {
            pending: RefCell::new(VecDeque::new()),
            wake: RefCell::new(None),
        }
    }

    pub(crate) fn set_wake(&self, wake: Rc<dyn Fn()>) {
        *self.wake.borrow_mut() = Some(wake);
    }

    /// Queues `item` and wakes the driver.
    pub(crate) fn push(&self, item: Pending<E>) {
        self.pending.borrow_mut().push_back(item);
        let wake = self.wake.borrow().clone();
        if let Some(wake) = wake {
            wake();
        }
    }

    pub(crate) fn pop(&self) -> Option<Pending<E>> {
        self.pending.borrow_mut().pop_front()
    }
}
