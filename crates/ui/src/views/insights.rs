use dioxus::prelude::*;

use services::InsightsService;

use crate::context::AppContext;
use crate::views::ViewState;
use crate::vm::{map_insight_bars, InsightBarVm};

#[component]
pub fn InsightsView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.directory().read().clone();

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "Loading universities..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(snapshot) => {
            let report = InsightsService::local(snapshot.universities());
            let regions = map_insight_bars(&report.regions);
            let types = map_insight_bars(&report.types);
            let difficulty = map_insight_bars(&report.difficulty);

            rsx! {
                div { class: "insight-panels",
                    InsightPanel { title: "Universities by region", bars: regions }
                    InsightPanel { title: "Public vs private", bars: types }
                    InsightPanel { title: "Admission difficulty", bars: difficulty }
                }
            }
        }
    };

    rsx! {
        div { class: "page insights",
            h2 { "Insights" }
            {body}
        }
    }
}

#[component]
fn InsightPanel(title: &'static str, bars: Vec<InsightBarVm>) -> Element {
    rsx! {
        section { class: "insight-panel",
            h3 { "{title}" }
            for bar in bars {
                div { class: "insight-row",
                    span { class: "insight-label", "{bar.label}" }
                    div { class: "insight-track",
                        div { class: "insight-bar", style: "width: {bar.percent}%" }
                    }
                    span { class: "insight-count", "{bar.count}" }
                }
            }
        }
    }
}
