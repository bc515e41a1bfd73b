use dioxus::prelude::*;

use crate::domain::models::{PublicationType, SortOrder};
use crate::shared::constants::ANY_PUBLICATION_TYPE;
use crate::shared::hooks::{run_search, ExploreSearch};

/// Filter controls: query box, category select, sorting radios and the
/// clear button. Every change immediately re-runs the search; there is no
/// submit button.
#[component]
pub fn FilterPanel(state: ExploreSearch) -> Element {
    let mut state = state;

    let controls = state.controls.read();
    let query = controls.query.clone();
    let publication_filter = controls.publication_filter.clone();
    let sorting = controls.sorting;
    let csrf_token = controls.csrf_token.clone();
    drop(controls);

    rsx! {
        div { id: "filters", class: "c-filters",
            input {
                r#type: "hidden",
                id: "csrf_token",
                name: "csrf_token",
                value: "{csrf_token}",
            }

            div { class: "c-filters__group",
                label { class: "c-filters__label", r#for: "query", "Search" }
                input {
                    r#type: "text",
                    id: "query",
                    class: "c-filters__input",
                    placeholder: "Title, author, director, tag...",
                    value: "{query}",
                    oninput: move |evt| {
                        state.controls.write().query = evt.value();
                        run_search(state);
                    },
                }
            }

            div { class: "c-filters__group",
                label { class: "c-filters__label", r#for: "publication_type", "Category" }
                select {
                    id: "publication_type",
                    class: "c-filters__select",
                    value: "{publication_filter}",
                    onchange: move |evt| {
                        state.controls.write().publication_filter = evt.value();
                        run_search(state);
                    },
                    option { value: ANY_PUBLICATION_TYPE, "Any" }
                    for publication_type in PublicationType::ALL {
                        option {
                            value: publication_type.wire_value(),
                            selected: publication_filter == publication_type.wire_value(),
                            "{publication_type.display_name()}"
                        }
                    }
                }
            }

            div { class: "c-filters__group",
                span { class: "c-filters__label", "Sort by" }
                label { class: "c-filters__radio",
                    input {
                        r#type: "radio",
                        name: "sorting",
                        value: "newest",
                        checked: sorting == SortOrder::Newest,
                        onchange: move |_| {
                            state.controls.write().sorting = SortOrder::Newest;
                            run_search(state);
                        },
                    }
                    "Newest first"
                }
                label { class: "c-filters__radio",
                    input {
                        r#type: "radio",
                        name: "sorting",
                        value: "oldest",
                        checked: sorting == SortOrder::Oldest,
                        onchange: move |_| {
                            state.controls.write().sorting = SortOrder::Oldest;
                            run_search(state);
                        },
                    }
                    "Oldest first"
                }
            }

            button {
                id: "clear-filters",
                class: "c-btn c-btn--secondary",
                onclick: move |_| {
                    state.clear_filters();
                    run_search(state);
                },
                "Clear filters"
            }
        }
    }
}
