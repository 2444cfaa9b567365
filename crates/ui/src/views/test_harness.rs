use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use api::InMemoryGateway;
use scout_core::time::fixed_clock;
use services::{AppServices, DirectoryService, InsightsService, WizardService};

use crate::context::{provide_app_context, UiApp};
use crate::views::{
    CompareView, DetailView, ExploreView, HomeView, InsightsView, WizardView,
};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn directory(&self) -> Arc<DirectoryService> {
        self.services.directory()
    }

    fn wizard(&self) -> Arc<WizardService> {
        self.services.wizard()
    }

    fn insights(&self) -> Arc<InsightsService> {
        self.services.insights()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Explore,
    Detail(u64),
    Compare,
    Wizard,
    Insights,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<dyn UiApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let ctx = provide_app_context(&props.app);
    use_context_provider(|| props.view);

    // Mirror the real App: the dataset loads once on mount.
    use_future(move || {
        let ctx = ctx.clone();
        async move {
            ctx.load_directory().await;
        }
    });

    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Explore => rsx! { ExploreView {} },
        ViewKind::Detail(id) => rsx! { DetailView { id } },
        ViewKind::Compare => rsx! { CompareView {} },
        ViewKind::Wizard => rsx! { WizardView {} },
        ViewKind::Insights => rsx! { InsightsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub gateway: InMemoryGateway,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Build, then let the startup load settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, gateway: InMemoryGateway) -> ViewHarness {
    let services = AppServices::new(fixed_clock(), Arc::new(gateway.clone()));
    let app: Arc<dyn UiApp> = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, gateway }
}
