//! Vitrine reveal core (host-agnostic)
//!
//! Scroll-triggered reveal/parallax animation for the portfolio page. The host
//! (the wasm adapter, or a test harness) supplies element geometry through
//! [`ElementHost`], feeds a [`Viewport`] snapshot every frame and applies the
//! [`StyleChange`]s returned in [`Outputs`].
//!
//! Layers, leaves first:
//! - `viewport` / `threshold`: geometry and GSAP-style start/end parsing
//! - `ease` / `value` / `tween` / `timeline`: time-driven interpolation
//! - `trigger` / `registry`: trigger evaluation against scroll position
//! - `page`, `cursor`, `transition`, `scroll_nav`: page-level controllers

pub mod config;
pub mod cursor;
pub mod ease;
pub mod error;
pub mod host;
pub mod ids;
pub mod liveness;
pub mod outputs;
pub mod page;
pub mod registry;
pub mod scroll_nav;
pub mod threshold;
pub mod timeline;
pub mod transition;
pub mod trigger;
pub mod tween;
pub mod value;
pub mod viewport;

// Re-exports for adapters
pub use config::RevealConfig;
pub use cursor::{CustomCursor, Hoverable, PointerKind};
pub use ease::Ease;
pub use error::RevealError;
pub use host::{ElementHost, ElementLayout, LayoutTable};
pub use ids::TriggerId;
pub use liveness::{FrameCallback, Liveness, PendingFrame, StyleSink};
pub use outputs::{Outputs, PageState, RevealEvent, StyleChange};
pub use page::{mount_page, MountedPage};
pub use registry::{RevealRegistry, TriggerHandle};
pub use scroll_nav::{NavItem, NavMenu, ScrollRequest, SmoothScroll, NAV_ITEMS};
pub use threshold::{Anchor, Edge, Threshold};
pub use timeline::{Position, Timeline};
pub use transition::PageTransition;
pub use trigger::{ScrollTriggerSpec, TargetWidth, TriggerMode, TweenSpec};
pub use tween::{Direction, Tween};
pub use value::{Property, VisualState};
pub use viewport::{Rect, Viewport};
