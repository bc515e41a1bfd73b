use dioxus::prelude::*;

/// Spinner row shown while the first search is still in flight.
#[component]
pub fn LoadingText(#[props(default = String::from("Loading..."))] message: String) -> Element {
    rsx! {
        div { class: "c-loading", role: "status",
            span { class: "c-loading__spinner", aria_hidden: "true" }
            span { class: "c-loading__text", "{message}" }
        }
    }
}

/// Banner for a failed search request. The last rendered results stay on
/// screen underneath it.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "⚠️" }
            span { class: "c-error__text", "{message}" }
        }
    }
}

/// Indicator shown when a search completes with zero matches.
#[component]
pub fn EmptyResults() -> Element {
    rsx! {
        div { id: "results_not_found", class: "c-empty",
            span { class: "c-empty__icon", "🎞️" }
            p { class: "c-empty__title", "No movie datasets found" }
            p { class: "c-empty__hint", "Try other words or clear the filters." }
        }
    }
}
