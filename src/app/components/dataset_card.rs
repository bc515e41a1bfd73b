use dioxus::prelude::*;

use crate::domain::models::DatasetSummary;
use crate::shared::utils::{format_created_at, movies_count_label};

/// One search result card.
///
/// Tag and category badges report clicks upward; the page decides how the
/// click changes the filter controls before re-running the search.
#[component]
pub fn DatasetCard(
    dataset: DatasetSummary,
    on_tag_click: EventHandler<String>,
    on_category_click: EventHandler<String>,
) -> Element {
    let created_at = format_created_at(&dataset.created_at);
    let movies_badge = movies_count_label(dataset.movies_count);
    let category = dataset.publication_type.clone();

    rsx! {
        article { class: "c-dataset-card",
            header { class: "c-dataset-card__header",
                h3 { class: "c-dataset-card__title",
                    a { href: "{dataset.url}", "🎬 {dataset.title}" }
                }
                div { class: "c-dataset-card__badges",
                    span { class: "c-badge c-badge--primary", "{movies_badge}" }
                    span {
                        class: "c-badge c-badge--secondary c-badge--clickable",
                        title: "Filter by this category",
                        onclick: move |_| on_category_click.call(category.clone()),
                        "{dataset.publication_type}"
                    }
                }
            }

            p { class: "c-dataset-card__date", "{created_at}" }
            p { class: "c-dataset-card__description", "{dataset.description}" }

            ul { class: "c-dataset-card__authors",
                for author in dataset.authors.iter() {
                    li { class: "c-dataset-card__author", "{author.display_line()}" }
                }
            }

            div { class: "c-dataset-card__tags",
                for tag in dataset.tags.iter() {
                    span {
                        class: "c-badge c-badge--tag",
                        title: "Search this tag",
                        onclick: {
                            let tag = tag.clone();
                            move |_| on_tag_click.call(tag.clone())
                        },
                        "{tag}"
                    }
                }
            }

            footer { class: "c-dataset-card__footer",
                a { class: "c-btn c-btn--link", href: "{dataset.url}", "View movie library" }
                a {
                    class: "c-btn c-btn--primary",
                    href: "{dataset.download}",
                    "Download ({dataset.total_size_in_human_format})"
                }
            }
        }
    }
}
