#![cfg(feature = "test-utils")]

use admin_shell_lib::data_types::ClickEvent;
use admin_shell_lib::dom_access::{MockElement, MockNode, MockViewport};
use admin_shell_lib::visibility::SidebarVisibility;

const SIDEBAR_ID: u32 = 1;
const NAV_LINK_ID: u32 = 2;
const TOGGLE_ID: u32 = 10;
const CONTENT_ID: u32 = 50;

/// A phone-sized session: toggle open, tap away to close, toggle open again,
/// then interact with the sidebar content without losing it.
#[test]
fn narrow_viewport_click_sequence() {
    let sidebar = MockElement::new(SIDEBAR_ID, &[NAV_LINK_ID]);
    let open = sidebar.open_flag();
    let toggle = MockElement::new(TOGGLE_ID, &[]);
    let controller = SidebarVisibility::install(Some(sidebar), Some(toggle), MockViewport(500))
        .expect("both elements present");

    assert!(!open.get(), "sidebar starts closed");

    // A real toggle click reaches both listeners: the control's, then the
    // document's via bubbling.
    controller.handle_toggle_click();
    controller.handle_document_click(&ClickEvent::new(MockNode(TOGGLE_ID)));
    assert!(open.get(), "toggle click opens");

    controller.handle_document_click(&ClickEvent::new(MockNode(CONTENT_ID)));
    assert!(!open.get(), "outside click closes");

    controller.handle_toggle_click();
    controller.handle_document_click(&ClickEvent::new(MockNode(TOGGLE_ID)));
    assert!(open.get(), "toggle click reopens");

    controller.handle_document_click(&ClickEvent::new(MockNode(NAV_LINK_ID)));
    assert!(open.get(), "click inside the sidebar keeps it open");
}

/// On a desktop-sized viewport the document listener never closes the
/// sidebar; state follows toggle-click parity alone.
#[test]
fn wide_viewport_ignores_outside_clicks() {
    let sidebar = MockElement::new(SIDEBAR_ID, &[NAV_LINK_ID]);
    let open = sidebar.open_flag();
    let toggle = MockElement::new(TOGGLE_ID, &[]);
    let controller = SidebarVisibility::install(Some(sidebar), Some(toggle), MockViewport(1280))
        .expect("both elements present");

    controller.handle_toggle_click();
    for _ in 0..3 {
        controller.handle_document_click(&ClickEvent::new(MockNode(CONTENT_ID)));
    }
    assert!(open.get());

    controller.handle_toggle_click();
    assert!(!open.get());
}
