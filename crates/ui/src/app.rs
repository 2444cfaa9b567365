use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::provide_app_context;
use crate::routes::Route;
use crate::UiApp;

#[component]
pub fn App() -> Element {
    let app = use_context::<Arc<dyn UiApp>>();
    let ctx = provide_app_context(&app);

    // The dataset is fetched once at startup; views re-trigger via intents.
    use_future(move || {
        let ctx = ctx.clone();
        async move {
            ctx.load_directory().await;
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route headings live in the views.
        document::Title { "UniScout" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
