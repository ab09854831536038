/// A handle to an element in the hosting document.
///
/// The visibility logic never walks the document itself; it only asks an
/// element whether a given node sits inside it. `Node` is the hosting
/// environment's node handle and must include the element itself (an
/// element contains its own node).
pub trait ElementHandle {
    type Node;

    fn contains(&self, node: &Self::Node) -> bool;
}

/// The sidebar element as the visibility logic sees it: a containment test
/// plus a single boolean-like presentation marker.
///
/// Implementations map the marker onto whatever the host uses to show the
/// sidebar (a CSS class in the browser, a signal in the UI layer).
pub trait SidebarHandle: ElementHandle {
    /// Flip the open marker and return the state after the flip.
    fn toggle_open(&self) -> bool;

    /// Remove the open marker. Already-closed is a harmless no-op.
    fn close(&self);
}

/// Read access to the ambient viewport width, sampled at click time.
pub trait ViewportProbe {
    fn width(&self) -> u32;
}
