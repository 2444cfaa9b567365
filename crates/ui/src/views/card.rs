use dioxus::prelude::*;
use dioxus_router::Link;

use scout_core::model::UniversityId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::UniversityCardVm;

#[component]
pub fn UniversityCard(card: UniversityCardVm) -> Element {
    let ctx = use_context::<AppContext>();
    let id = UniversityId::new(card.id);
    let compared = ctx.comparison().read().contains(id);
    let acronym = card.acronym.clone().unwrap_or_default();

    rsx! {
        article { class: "uni-card",
            header {
                h3 {
                    Link { to: Route::Detail { id: card.id }, "{card.name}" }
                }
                if !acronym.is_empty() {
                    span { class: "acronym", "{acronym}" }
                }
            }
            p { class: "uni-meta", "{card.region} | {card.kind_label}" }
            p { class: "uni-fees", "{card.fees_str}" }
            p {
                span { class: "badge {card.difficulty_class}", "{card.difficulty_label}" }
                span { class: "uni-programs", "{card.program_count} programs" }
            }
            button {
                class: if compared { "compare-btn active" } else { "compare-btn" },
                onclick: move |_| {
                    ctx.toggle_compare(id);
                },
                if compared { "Remove from compare" } else { "Add to compare" }
            }
        }
    }
}
