use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewState;
use crate::vm::format_fetched_at;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.directory().read().clone();
    let refreshing = ctx.is_refreshing();
    let ctx_refresh = ctx.clone();

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "Loading universities..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(snapshot) => {
            let university_count = snapshot.len();
            let region_count =
                scout_core::filter::distinct_regions(snapshot.universities()).len();
            let program_count: usize = snapshot
                .universities()
                .iter()
                .map(|uni| uni.programs().len())
                .sum();
            let fetched = format_fetched_at(snapshot.fetched_at());

            rsx! {
                section { class: "stats",
                    div { class: "stat",
                        span { class: "stat-value", "{university_count}" }
                        span { class: "stat-label", "Universities" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{program_count}" }
                        span { class: "stat-label", "Programs" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{region_count}" }
                        span { class: "stat-label", "Regions" }
                    }
                }
                section { class: "refresh",
                    button {
                        class: "button",
                        disabled: refreshing,
                        onclick: move |_| {
                            let ctx = ctx_refresh.clone();
                            spawn(async move {
                                ctx.refresh_data().await;
                            });
                        },
                        if refreshing { "Updating data..." } else { "Update data" }
                    }
                    span { class: "fetched-at", "Data as of {fetched}" }
                }
            }
        }
    };

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h2 { "Find your university in Tanzania" }
                p {
                    "Browse, compare and get matched with universities across the country, "
                    "all from one place."
                }
                p { class: "hero-actions",
                    Link { class: "button primary", to: Route::Explore {}, "Start exploring" }
                    Link { class: "button", to: Route::Wizard {}, "Get matched" }
                }
            }
            {body}
        }
    }
}
