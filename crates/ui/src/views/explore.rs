use std::time::Duration;

use dioxus::prelude::*;

use scout_core::filter::{
    distinct_regions, filter_universities, ExploreCriteria, SortKey, DEFAULT_MAX_FEES,
};

use crate::context::AppContext;
use crate::views::{UniversityCard, ViewState};
use crate::vm::map_university_card;

/// Sentinel dropdown options meaning "no constraint". Translated to `None`
/// before the criteria reach the filter engine.
const ALL_REGIONS: &str = "All Regions";
const ALL_TYPES: &str = "All Types";

/// Keystrokes settle for this long before the text filter re-runs.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[component]
pub fn ExploreView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.directory().read().clone();

    let mut search_input = use_signal(String::new);
    let mut search_query = use_signal(String::new);
    let mut debounce = use_signal(|| None::<Task>);
    let mut region_choice = use_signal(|| ALL_REGIONS.to_string());
    let mut type_choice = use_signal(|| ALL_TYPES.to_string());
    let mut max_fees = use_signal(|| DEFAULT_MAX_FEES);
    let mut sort_choice = use_signal(|| SortKey::default().label().to_string());

    let on_search = move |evt: FormEvent| {
        let value = evt.value();
        search_input.set(value.clone());
        // Keep only the newest pending update.
        if let Some(task) = debounce.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            search_query.set(value);
        });
        debounce.set(Some(task));
    };

    let mut reset_filters = move || {
        search_input.set(String::new());
        search_query.set(String::new());
        region_choice.set(ALL_REGIONS.to_string());
        type_choice.set(ALL_TYPES.to_string());
        max_fees.set(DEFAULT_MAX_FEES);
        sort_choice.set(SortKey::default().label().to_string());
    };

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "Loading universities..." }
        },
        ViewState::Error(err) => {
            let ctx_retry = ctx.clone();
            rsx! {
                div { class: "error-panel",
                    p { class: "error", "{err.message()}" }
                    button {
                        class: "button",
                        onclick: move |_| {
                            let ctx = ctx_retry.clone();
                            spawn(async move {
                                ctx.load_directory().await;
                            });
                        },
                        "Try again"
                    }
                }
            }
        }
        ViewState::Ready(snapshot) => {
            let criteria = ExploreCriteria {
                text: search_query.read().clone(),
                region: Some(region_choice.read().clone())
                    .filter(|choice| choice.as_str() != ALL_REGIONS),
                kind: type_choice.read().parse().ok(),
                max_fees: *max_fees.read(),
                sort: sort_choice.read().parse().unwrap_or_default(),
            };
            let results = filter_universities(snapshot.universities(), &criteria);
            let cards: Vec<_> = results.iter().map(|uni| map_university_card(uni)).collect();
            let result_count = cards.len();

            let mut region_options = vec![ALL_REGIONS.to_string()];
            region_options.extend(distinct_regions(snapshot.universities()));
            let type_options = [ALL_TYPES, "Public", "Private"];
            let filters_active = !criteria.is_default_filter();

            rsx! {
                div { class: "filter-bar",
                    input {
                        class: "search",
                        r#type: "text",
                        placeholder: "Search universities or programs...",
                        value: "{search_input}",
                        oninput: on_search,
                    }
                    select {
                        value: "{region_choice}",
                        onchange: move |evt| region_choice.set(evt.value()),
                        for label in region_options {
                            option { value: "{label}", "{label}" }
                        }
                    }
                    select {
                        value: "{type_choice}",
                        onchange: move |evt| type_choice.set(evt.value()),
                        for label in type_options {
                            option { value: "{label}", "{label}" }
                        }
                    }
                    label { class: "fees-filter",
                        "Max fees"
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{max_fees}",
                            onchange: move |evt| {
                                max_fees.set(evt.value().parse().unwrap_or(DEFAULT_MAX_FEES));
                            },
                        }
                    }
                    select {
                        value: "{sort_choice}",
                        onchange: move |evt| sort_choice.set(evt.value()),
                        for key in SortKey::ALL {
                            option { value: "{key.label()}", "{key.label()}" }
                        }
                    }
                    if filters_active {
                        button { class: "button subtle", onclick: move |_| reset_filters(), "Reset" }
                    }
                }

                p { class: "result-count", "{result_count} results" }

                if cards.is_empty() {
                    div { class: "empty",
                        p { "No universities match the current filters." }
                    }
                } else {
                    div { class: "card-grid",
                        for card in cards {
                            UniversityCard { card }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page explore",
            h2 { "Explore Universities" }
            {body}
        }
    }
}
