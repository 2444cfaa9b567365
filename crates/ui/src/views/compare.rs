use dioxus::prelude::*;
use dioxus_router::Link;

use scout_core::model::{UniversityId, MAX_COMPARED};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewState;
use crate::vm::map_compare_table;

#[component]
pub fn CompareView() -> Element {
    let ctx = use_context::<AppContext>();
    let selection = ctx.comparison().read().clone();
    let state = ctx.directory().read().clone();
    let ctx_clear = ctx.clone();

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "Loading universities..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(snapshot) => {
            let table = map_compare_table(&selection, snapshot.universities());

            if table.columns.is_empty() {
                rsx! {
                    div { class: "empty",
                        p { "Nothing selected yet. Pick up to {MAX_COMPARED} universities to compare." }
                        Link { class: "button primary", to: Route::Explore {}, "Browse universities" }
                    }
                }
            } else {
                let column_count = table.columns.len();
                rsx! {
                    div { class: "compare-toolbar",
                        p { "Comparing {column_count} of {MAX_COMPARED} universities" }
                        button {
                            class: "button subtle",
                            onclick: move |_| ctx_clear.clear_comparison(),
                            "Clear all"
                        }
                    }
                    table { class: "compare-table",
                        thead {
                            tr {
                                th { "" }
                                for column in table.columns {
                                    th {
                                        Link { to: Route::Detail { id: column.id }, "{column.name}" }
                                        RemoveButton { id: column.id }
                                    }
                                }
                            }
                        }
                        tbody {
                            for row in table.rows {
                                tr {
                                    th { "{row.label}" }
                                    for value in row.values {
                                        td { "{value}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page compare",
            h2 { "Compare Universities" }
            {body}
        }
    }
}

#[component]
fn RemoveButton(id: u64) -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        button {
            class: "remove",
            onclick: move |_| {
                ctx.toggle_compare(UniversityId::new(id));
            },
            "Remove"
        }
    }
}
