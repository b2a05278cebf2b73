// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::host::DomHost;

/// Body class present while the mobile navigation is open.
pub const OPEN_CLASS: &str = "mobile-nav-active";
/// Toggle icon class while closed.
pub const MENU_ICON: &str = "bx-menu";
/// Toggle icon class while open.
pub const CLOSE_ICON: &str = "bx-x";

/// Open/closed state of the mobile navigation.
///
/// The state lives here rather than in the DOM; the body class, the icon
/// classes and `aria-expanded` are written to match it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MobileNav<E> {
    body: E,
    toggle: E,
    icon: E,
    open: bool,
}

impl<E: Copy> MobileNav<E> {
    /// Wraps an existing toggle. The icon is its first `i` child, or the
    /// toggle itself. The initial state is read from the body class.
    pub fn attach<H: DomHost<Element = E>>(host: &H, body: E, toggle: E) -> Self {
        Self {
            body,
            toggle,
            icon: host.query_first_within(toggle, "i").unwrap_or(toggle),
            open: host.has_class(body, OPEN_CLASS),
        }
    }

    /// Flips the state.
    pub fn toggle<H: DomHost<Element = E>>(&mut self, host: &mut H) {
        self.open = !self.open;
        self.write(host);
    }

    /// Closes the navigation. Returns `true` if it was open.
    pub fn close<H: DomHost<Element = E>>(&mut self, host: &mut H) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.write(host);
        true
    }

    /// Returns `true` while open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The toggle element.
    #[must_use]
    pub fn toggle_element(&self) -> E {
        self.toggle
    }

    fn write<H: DomHost<Element = E>>(&self, host: &mut H) {
        host.set_class(self.body, OPEN_CLASS, self.open);
        host.set_class(self.icon, MENU_ICON, !self.open);
        host.set_class(self.icon, CLOSE_ICON, self.open);
        host.set_attribute(self.toggle, "aria-expanded", if self.open { "true" } else { "false" });
    }
}
