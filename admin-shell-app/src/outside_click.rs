//! Document-level click wiring for web builds.
//!
//! The sidebar open flag lives in a Dioxus signal; the browser only hands us
//! raw nodes. This module bridges the two: web-sys elements back the
//! containment tests, the signal backs the open marker, and one bubble-phase
//! listener on the document forwards every click to the visibility logic.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, Node};

use admin_shell_lib::data_types::ClickEvent;
use admin_shell_lib::dom_access::{ElementHandle, SidebarHandle, ViewportProbe};
use admin_shell_lib::visibility::SidebarVisibility;

use crate::components::sidebar::{SIDEBAR_ID, TOGGLE_ID};

struct DomSidebar {
    element: Element,
    open: Signal<bool>,
}

impl ElementHandle for DomSidebar {
    type Node = Node;

    fn contains(&self, node: &Node) -> bool {
        self.element.contains(Some(node))
    }
}

impl SidebarHandle for DomSidebar {
    fn toggle_open(&self) -> bool {
        let mut open = self.open;
        let next = !open();
        open.set(next);
        next
    }

    fn close(&self) {
        let mut open = self.open;
        if open() {
            open.set(false);
        }
    }
}

struct DomToggle {
    element: Element,
}

impl ElementHandle for DomToggle {
    type Node = Node;

    fn contains(&self, node: &Node) -> bool {
        self.element.contains(Some(node))
    }
}

struct WindowViewport;

impl ViewportProbe for WindowViewport {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn width(&self) -> u32 {
        // An unreadable width counts as wide: the sidebar then only closes
        // through the toggle control.
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .map_or(u32::MAX, |width| width as u32)
    }
}

/// Attaches the outside-click-close listener to the document.
///
/// When either element is missing the page simply keeps a non-interactive
/// sidebar; nothing is raised. The listener stays installed for the lifetime
/// of the page, so the closure is leaked on purpose.
pub fn install(open: Signal<bool>) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let sidebar = document
        .get_element_by_id(SIDEBAR_ID)
        .map(|element| DomSidebar { element, open });
    let toggle = document
        .get_element_by_id(TOGGLE_ID)
        .map(|element| DomToggle { element });

    let Some(controller) = SidebarVisibility::install(sidebar, toggle, WindowViewport) else {
        tracing::debug!("sidebar or toggle element missing; outside-click close not wired");
        return;
    };

    let listener = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |evt: MouseEvent| {
        let Some(target) = evt.target().and_then(|target| target.dyn_into::<Node>().ok()) else {
            return;
        };
        controller.handle_document_click(&ClickEvent::new(target));
    }));

    if document
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        listener.forget();
    }
}
