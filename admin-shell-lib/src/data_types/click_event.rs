/// A click somewhere in the document, reduced to the only piece of
/// information the visibility logic cares about: which node was hit.
///
/// `N` is whatever node handle the hosting environment uses (a real DOM
/// node in the browser, a mock node id in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent<N> {
    pub target: N,
}

impl<N> ClickEvent<N> {
    #[must_use]
    pub fn new(target: N) -> Self {
        Self { target }
    }
}
