use dioxus::prelude::*;
use dioxus_router::Link;

use scout_core::model::UniversityId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::{format_tzs, map_program_rows};

#[component]
pub fn DetailView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory_service();

    let resource = use_resource(move || {
        let directory = directory.clone();
        async move {
            directory
                .get(UniversityId::new(id))
                .await
                .map_err(|err| ViewError::from_directory(&err))
        }
    });
    let state = view_state_from_resource(&resource);

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "Loading university..." }
        },
        ViewState::Error(err) => rsx! {
            div { class: "error-panel",
                p { class: "error", "{err.message()}" }
                Link { class: "button", to: Route::Explore {}, "Back to explore" }
            }
        },
        ViewState::Ready(uni) => {
            let uid = uni.id();
            let compared = ctx.comparison().read().contains(uid);
            let ctx_toggle = ctx.clone();
            let heading = match uni.acronym() {
                Some(acronym) => format!("{} ({acronym})", uni.name()),
                None => uni.name().to_owned(),
            };
            let location = uni.location().unwrap_or("Location not listed").to_owned();
            let fees = format_tzs(uni.avg_fees());
            let program_rows = map_program_rows(&uni);
            let facilities: Vec<String> = uni.facilities().to_vec();
            let description = uni.description().map(str::to_owned);
            let admission = uni.admission_requirements().map(str::to_owned);
            let kind_label = uni.kind().label();
            let difficulty_label = uni.difficulty().label();
            let region = uni.region().to_owned();

            rsx! {
                header { class: "detail-header",
                    h2 { "{heading}" }
                    p { class: "uni-meta", "{region} | {location} | {kind_label}" }
                    p { class: "uni-fees", "{fees} per year" }
                    p {
                        span { class: "badge", "{difficulty_label} difficulty" }
                    }
                    button {
                        class: if compared { "compare-btn active" } else { "compare-btn" },
                        onclick: move |_| {
                            ctx_toggle.toggle_compare(uid);
                        },
                        if compared { "Remove from compare" } else { "Add to compare" }
                    }
                }

                if let Some(text) = description {
                    section {
                        h3 { "About" }
                        p { "{text}" }
                    }
                }

                if let Some(text) = admission {
                    section {
                        h3 { "Admission requirements" }
                        p { "{text}" }
                    }
                }

                section {
                    h3 { "Programs" }
                    if program_rows.is_empty() {
                        p { "No programs listed." }
                    } else {
                        table { class: "programs",
                            thead {
                                tr {
                                    th { "Program" }
                                    th { "Duration" }
                                    th { "Difficulty" }
                                    th { "Prospects" }
                                }
                            }
                            tbody {
                                for row in program_rows {
                                    tr {
                                        td { "{row.name}" }
                                        td { "{row.duration_str}" }
                                        td { "{row.difficulty_label}" }
                                        td { "{row.prospects}" }
                                    }
                                }
                            }
                        }
                    }
                }

                section {
                    h3 { "Facilities" }
                    if facilities.is_empty() {
                        p { "No facilities listed." }
                    } else {
                        ul { class: "facilities",
                            for facility in facilities {
                                li { "{facility}" }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page detail",
            {body}
        }
    }
}
