mod element_handle;
#[cfg(any(test, feature = "test-utils"))]
mod mock_dom;

pub use element_handle::*;
#[cfg(any(test, feature = "test-utils"))]
pub use mock_dom::*;
