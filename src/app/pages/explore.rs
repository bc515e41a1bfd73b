//! Explore page: route table, layout and the page itself.

use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{DatasetCard, EmptyResults, ErrorMessage, FilterPanel, LoadingText};
use crate::app::layouts::AppNavbar;
use crate::shared::hooks::{run_initial_search, run_search, use_explore_search};
use crate::shared::utils::results_found_label;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    ExplorePage {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Explore app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // asset!() ensures the bundled stylesheet is served with the page
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-layout",
            AppNavbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

/// The explore view: filter panel on top, result list below.
#[component]
pub fn ExplorePage() -> Element {
    let mut state = use_explore_search();

    // Seed the query box from ?query= and fire the first search once mounted
    use_effect(move || {
        run_initial_search(state);
    });

    let error = state.error.read().clone();
    let is_searching = *state.is_searching.read();
    let results = state.results.read().clone();

    rsx! {
        section { class: "c-explore",
            header { class: "c-explore__header",
                h1 { class: "c-explore__title", "Explore movie datasets" }
                p { class: "c-explore__subtitle",
                    "Search published datasets by title, description, authors, tags or movie metadata."
                }
            }

            FilterPanel { state }

            if let Some(error_message) = error {
                ErrorMessage { message: error_message }
            }

            match results {
                None => rsx! {
                    LoadingText { message: "Loading movie datasets...".to_string() }
                },
                Some(datasets) => rsx! {
                    div { class: "c-explore__meta",
                        p { id: "results_number", class: "c-explore__count",
                            {results_found_label(datasets.len())}
                        }
                        if is_searching {
                            span { class: "c-explore__searching", "Searching..." }
                        }
                    }

                    if datasets.is_empty() {
                        EmptyResults {}
                    }

                    div { id: "results", class: "c-explore__results",
                        for dataset in datasets.iter() {
                            DatasetCard {
                                key: "{dataset.id}",
                                dataset: dataset.clone(),
                                on_tag_click: move |tag: String| {
                                    state.set_tag_as_query(&tag);
                                    run_search(state);
                                },
                                on_category_click: move |label: String| {
                                    state.set_category_filter(&label);
                                    run_search(state);
                                },
                            }
                        }
                    }
                },
            }
        }
    }
}
