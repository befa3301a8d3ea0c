use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use journey_core::JourneyEvent;
use services::{JourneyService, JourneySession, StartOptions};

use crate::context::{UiApp, build_app_context};
use crate::views::JourneyView;

use super::journey::JourneyTestHandles;

#[derive(Clone)]
struct TestApp {
    start_options: StartOptions,
    journey: Arc<JourneyService>,
}

impl UiApp for TestApp {
    fn start_options(&self) -> StartOptions {
        self.start_options
    }

    fn journey_service(&self) -> Arc<JourneyService> {
        Arc::clone(&self.journey)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: JourneyTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
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
    rsx! { JourneyView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: JourneyTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Send an event through the root view's dispatcher and re-render.
    pub fn dispatch(&mut self, event: JourneyEvent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(event));
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> JourneySession {
        self.dom.in_runtime(|| self.handles.session())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(start_options: StartOptions) -> ViewHarness {
    let journey = Arc::new(JourneyService::from_catalog().expect("catalog"));
    let handles = JourneyTestHandles::default();
    let app = Arc::new(TestApp {
        start_options,
        journey,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
