use dioxus::prelude::*;

use crate::components::main_view::SectionKind;

/// Element ids the document-level wiring looks up; they must match the
/// nodes rendered here.
pub const SIDEBAR_ID: &str = "sidebar";
pub const TOGGLE_ID: &str = "sidebarToggle";

const SECTIONS: [SectionKind; 4] = [
    SectionKind::Dashboard,
    SectionKind::Products,
    SectionKind::Categories,
    SectionKind::Orders,
];

#[component]
pub fn Sidebar(mut selection: Signal<SectionKind>, mut sidebar_open: Signal<bool>) -> Element {
    let nav_class = if sidebar_open() {
        "sidebar sidebar--open"
    } else {
        "sidebar"
    };

    rsx! {
        button {
            id: TOGGLE_ID,
            class: "sidebar-toggle",
            aria_label: "Toggle navigation",
            // the only place a user click opens the sidebar
            onclick: move |_| {
                let open = sidebar_open();
                sidebar_open.set(!open);
            },
            span { class: "sidebar-toggle__hint", "☰" }
        }
        nav { id: SIDEBAR_ID, class: nav_class,
            // Selecting a section deliberately leaves the open flag alone;
            // on narrow screens the document listener closes the sidebar
            // only for clicks that land outside it.
            for section in SECTIONS {
                button {
                    class: if selection() == section { "sidebar__link sidebar__link--active" } else { "sidebar__link" },
                    onclick: move |_| selection.set(section),
                    "{section}"
                }
            }
        }
    }
}
