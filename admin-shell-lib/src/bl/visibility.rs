use crate::data_types::ClickEvent;
use crate::dom_access::{ElementHandle, SidebarHandle, ViewportProbe};

/// Viewport width (logical pixels) below which an outside click closes the
/// sidebar. At or above it, only direct toggle clicks change the marker.
pub const MOBILE_BREAKPOINT_PX: u32 = 992;

/// Wires a sidebar element and its toggle control together.
///
/// Two operations, both driven by clicks the host forwards in:
/// - a click on the toggle control flips the open marker,
/// - any other document click force-closes the sidebar, but only on narrow
///   viewports and only when the click landed outside both elements.
///
/// The open marker is never mutated through any other path.
pub struct SidebarVisibility<S, T, V> {
    sidebar: S,
    toggle: T,
    viewport: V,
}

impl<S, T, V> SidebarVisibility<S, T, V>
where
    S: SidebarHandle,
    T: ElementHandle<Node = S::Node>,
    V: ViewportProbe,
{
    /// Builds the controller from the two element lookups.
    ///
    /// Returns `None` when either lookup came back empty: the sidebar simply
    /// stays non-interactive for this control. No error, no partial wiring.
    #[must_use]
    pub fn install(sidebar: Option<S>, toggle: Option<T>, viewport: V) -> Option<Self> {
        let (sidebar, toggle) = sidebar.zip(toggle)?;
        Some(Self {
            sidebar,
            toggle,
            viewport,
        })
    }

    /// A click on the toggle control: flip the marker.
    pub fn handle_toggle_click(&self) {
        let open = self.sidebar.toggle_open();
        tracing::debug!(open, "sidebar toggled");
    }

    /// A click anywhere in the document.
    ///
    /// Clicks inside the sidebar or on the toggle control are left alone; so
    /// is everything on viewports at or past the breakpoint. The toggle
    /// click bubbles here too, which is why the toggle subtree is excluded:
    /// the flip from [`Self::handle_toggle_click`] must not be undone in the
    /// same click.
    pub fn handle_document_click(&self, event: &ClickEvent<S::Node>) {
        if self.viewport.width() >= MOBILE_BREAKPOINT_PX {
            return;
        }
        if self.sidebar.contains(&event.target) || self.toggle.contains(&event.target) {
            return;
        }
        self.sidebar.close();
    }
}
