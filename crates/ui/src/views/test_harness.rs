use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use portal_core::model::ViewId;
use portal_core::time::fixed_now;
use portal_core::{Clock, PortalTimings};
use services::{AnswerOutcome, Portal, SubmissionConfig, SubmissionService};
use storage::PortalManifest;
use url::Url;

use crate::context::{UiApp, build_app_context};
use crate::views::PortalShell;

pub const PAGE_BASE: &str = "https://portal.example/education";

struct TestApp {
    manifest: Arc<PortalManifest>,
    submissions: Arc<SubmissionService>,
    fragment: Option<String>,
}

impl UiApp for TestApp {
    fn manifest(&self) -> Arc<PortalManifest> {
        Arc::clone(&self.manifest)
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }

    fn timings(&self) -> PortalTimings {
        PortalTimings::immediate()
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn page_base(&self) -> Url {
        Url::parse(PAGE_BASE).expect("page base")
    }

    fn initial_fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn start_view(&self) -> Option<ViewId> {
        None
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    prepare: fn(&mut Portal),
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_context_provider(|| {
        let mut portal = ctx.open_portal();
        (props.prepare)(&mut portal);
        Signal::new(portal)
    });
    rsx! { PortalShell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Endpoints for both submission kinds; nothing is sent while rendering.
pub fn enabled_submissions() -> SubmissionConfig {
    SubmissionConfig {
        feedback_endpoint: Some(Url::parse("https://hooks.example/feedback").expect("url")),
        interest_endpoint: Some(Url::parse("https://hooks.example/interest").expect("url")),
        user_email: None,
    }
}

pub fn setup_shell(
    config: SubmissionConfig,
    fragment: Option<&str>,
    prepare: fn(&mut Portal),
) -> ViewHarness {
    let manifest = Arc::new(PortalManifest::sample().expect("sample manifest"));
    let app = Arc::new(TestApp {
        manifest,
        submissions: Arc::new(SubmissionService::http(config)),
        fragment: fragment.map(str::to_string),
    });
    let dom = VirtualDom::new_with_props(ShellHarness, ShellHarnessProps { app, prepare });
    ViewHarness { dom }
}

pub fn view(raw: &str) -> ViewId {
    ViewId::new(raw).expect("view id")
}

/// Answer the current question and apply the advance immediately.
pub fn answer_now(portal: &mut Portal, option: usize) {
    let AnswerOutcome::Accepted { pending, .. } = portal.answer(option) else {
        panic!("answer rejected");
    };
    portal.advance(pending);
}
