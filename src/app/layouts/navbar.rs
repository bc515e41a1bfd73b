use dioxus::prelude::*;

#[component]
pub fn AppNavbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__brand", "🎬 ReelHub" }
            span { class: "c-navbar__tagline", "movie dataset hub" }
        }
    }
}
