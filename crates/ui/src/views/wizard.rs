use dioxus::prelude::*;

use scout_core::filter::distinct_regions;
use scout_core::model::ANY_CHOICE;

use crate::context::AppContext;
use crate::views::{UniversityCard, ViewState};
use crate::vm::{
    map_university_card, WizardFlow, WizardIntent, WizardStep, DIFFICULTY_OPTIONS,
    INTEREST_OPTIONS, TYPE_OPTIONS,
};

/// How many of the ranked matches are shown on the results panel.
const RESULT_LIMIT: usize = 5;

#[component]
pub fn WizardView() -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.wizard_flow().read().clone();
    let state = ctx.directory().read().clone();

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "Loading universities..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(snapshot) => {
            if flow.show_results() {
                let matches = ctx
                    .wizard_service()
                    .recommend_local(snapshot.universities(), flow.preferences());
                let total = matches.len();
                let cards: Vec<_> = matches
                    .iter()
                    .take(RESULT_LIMIT)
                    .map(map_university_card)
                    .collect();
                let ctx_back = ctx.clone();
                let ctx_restart = ctx.clone();

                rsx! {
                    section { class: "wizard-results",
                        h3 { "Your matches" }
                        if total == 0 {
                            p { class: "empty",
                                "No universities match all your preferences. "
                                "Loosen a constraint and try again."
                            }
                        } else {
                            p { "We found {total} universities that match your preferences." }
                            div { class: "card-grid",
                                for card in cards {
                                    UniversityCard { card }
                                }
                            }
                        }
                        p { class: "wizard-actions",
                            button {
                                class: "button subtle",
                                onclick: move |_| ctx_back.dispatch_wizard(WizardIntent::Back),
                                "Back"
                            }
                            button {
                                class: "button",
                                onclick: move |_| ctx_restart.dispatch_wizard(WizardIntent::Restart),
                                "Start over"
                            }
                        }
                    }
                }
            } else {
                let step = flow.current_step();
                let progress = flow.progress_percent();
                let step_number = flow.step_number();
                let total_steps = flow.total_steps();
                let options = step_options(step, &flow, snapshot.universities());
                let ctx_back = ctx.clone();
                let ctx_next = ctx.clone();
                let next_label = if flow.is_last_step() { "See results" } else { "Next" };
                let back_disabled = flow.is_first_step();
                let title = step.title();
                let subtitle = step.subtitle();

                rsx! {
                    section { class: "wizard-step",
                        div { class: "progress-track",
                            div { class: "progress-bar", style: "width: {progress}%" }
                        }
                        p { class: "step-count", "Step {step_number} of {total_steps}" }
                        h3 { "{title}" }
                        p { class: "subtitle", "{subtitle}" }

                        if step == WizardStep::Budget {
                            BudgetField { flow: flow.clone() }
                        } else {
                            div { class: "choice-grid",
                                for option in options {
                                    WizardChoice {
                                        label: option.label,
                                        selected: option.selected,
                                    }
                                }
                            }
                        }

                        p { class: "wizard-actions",
                            button {
                                class: "button subtle",
                                disabled: back_disabled,
                                onclick: move |_| ctx_back.dispatch_wizard(WizardIntent::Back),
                                "Back"
                            }
                            button {
                                class: "button primary",
                                onclick: move |_| ctx_next.dispatch_wizard(WizardIntent::Next),
                                "{next_label}"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page wizard",
            h2 { "University Match Wizard" }
            p { class: "lead",
                "Answer a few questions and get personalized recommendations."
            }
            {body}
        }
    }
}

struct ChoiceOption {
    label: String,
    selected: bool,
}

fn step_options(
    step: WizardStep,
    flow: &WizardFlow,
    records: &[scout_core::model::University],
) -> Vec<ChoiceOption> {
    let labels: Vec<String> = match step {
        WizardStep::Region => {
            let mut labels = vec![ANY_CHOICE.to_string()];
            labels.extend(distinct_regions(records));
            labels
        }
        WizardStep::Kind => TYPE_OPTIONS.iter().map(|s| (*s).to_string()).collect(),
        WizardStep::Interest => INTEREST_OPTIONS.iter().map(|s| (*s).to_string()).collect(),
        WizardStep::Difficulty => DIFFICULTY_OPTIONS.iter().map(|s| (*s).to_string()).collect(),
        // The budget step renders its own numeric field.
        WizardStep::Budget => Vec::new(),
    };

    let selected = flow.selection_label(step);
    labels
        .into_iter()
        .map(|label| ChoiceOption {
            selected: label == selected,
            label,
        })
        .collect()
}

#[component]
fn WizardChoice(label: String, selected: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let choice = label.clone();

    rsx! {
        button {
            class: if selected { "choice selected" } else { "choice" },
            onclick: move |_| {
                ctx.dispatch_wizard(WizardIntent::Choose(choice.clone()));
            },
            "{label}"
        }
    }
}

#[component]
fn BudgetField(flow: WizardFlow) -> Element {
    let ctx = use_context::<AppContext>();
    let ctx_any = ctx.clone();
    let value = flow
        .preferences()
        .max_fees()
        .map(|fees| fees.to_string())
        .unwrap_or_default();
    let unconstrained = flow.preferences().max_fees().is_none();

    rsx! {
        div { class: "budget-field",
            input {
                r#type: "number",
                min: "0",
                placeholder: "e.g. 3000000",
                value: "{value}",
                onchange: move |evt| {
                    ctx.dispatch_wizard(WizardIntent::ChooseBudget(evt.value().parse().ok()));
                },
            }
            button {
                class: if unconstrained { "choice selected" } else { "choice" },
                onclick: move |_| {
                    ctx_any.dispatch_wizard(WizardIntent::ChooseBudget(None));
                },
                "No budget limit"
            }
        }
    }
}
