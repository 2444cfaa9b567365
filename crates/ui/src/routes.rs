use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{
    CompareView, DetailView, ExploreView, HomeView, InsightsView, WizardView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/explore", ExploreView)] Explore {},
        #[route("/universities/:id", DetailView)] Detail { id: u64 },
        #[route("/compare", CompareView)] Compare {},
        #[route("/wizard", WizardView)] Wizard {},
        #[route("/insights", InsightsView)] Insights {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let compared = ctx.comparison().read().len();

    rsx! {
        nav { class: "sidebar",
            h1 { "UniScout" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Explore {}, "Explore" } }
                li {
                    Link { to: Route::Compare {},
                        "Compare"
                        if compared > 0 {
                            span { class: "badge", "{compared}" }
                        }
                    }
                }
                li { Link { to: Route::Wizard {}, "Wizard" } }
                li { Link { to: Route::Insights {}, "Insights" } }
            }
        }
    }
}
