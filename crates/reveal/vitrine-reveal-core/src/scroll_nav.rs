//! Anchor navigation: smooth-scroll requests, nav items and the mobile menu.

use serde::{Deserialize, Serialize};

use crate::host::ElementHost;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { name: "Accueil", href: "#home" },
    NavItem { name: "Portfolio", href: "#portfolio" },
    NavItem { name: "A propos", href: "#about" },
    NavItem { name: "Services", href: "#services" },
    NavItem { name: "Contact", href: "#contact" },
];

/// Instruction for the host to scroll the window (smooth behavior).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub top: f32,
}

#[derive(Clone, Debug)]
struct Pending {
    request: ScrollRequest,
    remaining_ms: f32,
}

/// Delayed smooth scrolling for in-page anchors.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    delay_ms: f32,
    pending: Option<Pending>,
    detached: bool,
}

impl SmoothScroll {
    pub fn new(delay_ms: f32) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            pending: None,
            detached: false,
        }
    }

    /// Handle a click on a link. Returns true when the link is an in-page
    /// anchor with a known section; the host must then prevent the default
    /// navigation. A newer click replaces a pending request.
    pub fn on_link_click(&mut self, href: &str, host: &dyn ElementHost) -> bool {
        if self.detached {
            return false;
        }
        let Some(section) = href.strip_prefix('#').filter(|s| !s.is_empty()) else {
            return false;
        };
        let Some(rect) = host.rect(section) else {
            log::debug!("anchor '{href}' has no matching section");
            return false;
        };
        self.pending = Some(Pending {
            request: ScrollRequest { top: rect.top },
            remaining_ms: self.delay_ms,
        });
        true
    }

    /// Advance the delay clock; yields the request once it is due.
    pub fn advance(&mut self, dt_ms: f32) -> Option<ScrollRequest> {
        let pending = self.pending.as_mut()?;
        pending.remaining_ms -= dt_ms.max(0.0);
        if pending.remaining_ms > 0.0 {
            return None;
        }
        self.pending.take().map(|p| p.request)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Unmount: drop any pending request and ignore later clicks.
    pub fn detach(&mut self) {
        self.cancel();
        self.detached = true;
    }
}

/// Mobile navigation menu; any link click closes it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn on_link_click(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::LayoutTable;
    use crate::viewport::Rect;

    fn host() -> LayoutTable {
        let mut t = LayoutTable::new();
        t.insert("contact", Rect::new(4200.0, 0.0, 1280.0, 900.0));
        t
    }

    #[test]
    fn anchor_scroll_fires_after_delay() {
        let mut s = SmoothScroll::new(100.0);
        assert!(s.on_link_click("#contact", &host()));
        assert_eq!(s.advance(60.0), None);
        assert_eq!(s.advance(40.0), Some(ScrollRequest { top: 4200.0 }));
        assert!(!s.has_pending());
    }

    #[test]
    fn unknown_and_external_links_are_ignored() {
        let mut s = SmoothScroll::new(100.0);
        assert!(!s.on_link_click("#nowhere", &host()));
        assert!(!s.on_link_click("https://instagram.com/y2s_94140", &host()));
        assert!(!s.on_link_click("#", &host()));
        assert!(!s.has_pending());
    }

    #[test]
    fn detach_cancels_pending_request() {
        let mut s = SmoothScroll::new(100.0);
        s.on_link_click("#contact", &host());
        s.detach();
        assert_eq!(s.advance(500.0), None);
        assert!(!s.on_link_click("#contact", &host()));
    }

    #[test]
    fn menu_closes_on_navigation() {
        let mut m = NavMenu::default();
        m.toggle();
        assert!(m.is_open());
        m.on_link_click();
        assert!(!m.is_open());
        assert_eq!(NAV_ITEMS.len(), 5);
    }
}
