use dioxus::prelude::*;

/// Define a components module that contains all shared components for our app.
mod components;
#[cfg(target_arch = "wasm32")]
mod outside_click;

use components::{
    main_view::{MainView, SectionKind},
    sidebar::Sidebar,
};

// The asset macro also minifies some assets like CSS and JS to make bundled smaller
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const SIDE_BAR_CSS: Asset = asset!("/assets/styling/side_bar.css");

fn main() {
    // The `launch` function is the main entry point for a dioxus app. It takes a component and renders it with the platform feature
    // you have enabled
    dioxus::launch(App);
}

/// App is the main component of our app. It owns the sidebar open flag: the only
/// writers are the toggle control in [`Sidebar`] and, on web builds, the
/// document-level outside-click listener installed below.
#[component]
fn App() -> Element {
    let selection = use_signal(|| SectionKind::Dashboard);
    let sidebar_open = use_signal(|| false);

    // Closing on an outside click is a browser behavior: it needs the real
    // document to attach a listener to and real nodes for containment tests.
    // Installed once; the effect reads no signals, so it never re-runs.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || outside_click::install(sidebar_open));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: SIDE_BAR_CSS }

        div { class: "app-shell",
            Sidebar { selection, sidebar_open }
            MainView { selection }
        }
    }
}
