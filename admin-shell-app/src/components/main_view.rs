use dioxus::prelude::*;
use strum_macros::Display;

#[derive(Clone, Copy, PartialEq, Display)]
pub enum SectionKind {
    Dashboard,
    Products,
    Categories,
    Orders,
}

#[component]
pub fn MainView(selection: Signal<SectionKind>) -> Element {
    rsx! {
        main { class: "content-shell", role: "main",
            h1 { class: "content-shell__title", "{selection()}" }
            match selection() {
                SectionKind::Dashboard => rsx! {
                    p { "Sales and order volume at a glance." }
                },
                SectionKind::Products => rsx! {
                    p { "Create, edit and remove products." }
                },
                SectionKind::Categories => rsx! {
                    p { "Manage categories and subcategories." }
                },
                SectionKind::Orders => rsx! {
                    p { "Review and update customer orders." }
                },
            }
        }
    }
}
