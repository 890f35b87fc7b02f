mod blocks;
mod faq;
mod footer;
mod hero;
mod icons;
mod intro;
mod rules;
mod sidebar;
mod term;

use self::{
    faq::Faq,
    footer::Footer,
    hero::Hero,
    intro::{Intro, Principles},
    rules::{Moderators, Players},
    sidebar::Sidebar,
};
use crate::{
    config::TrackerConfig,
    dom,
    error_template::{AppError, ErrorTemplate},
    sections::Section,
    state::ScrollState,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub const TELEGRAM_URL: &str = "https://t.me/Train_Gores";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Правила TeeFusion"/>
        <Stylesheet id="leptos" href="/pkg/teefusion-rules.css"/>
        <meta name="viewport" content="width=device-width, initial-scale=1"/>
        <meta name="theme-color" content="#0d0f1a"/>
        <link rel="icon" type="image/svg+xml" href="/teefusion.svg"/>

        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(AppError::NotFound);
            view! {
                <ErrorTemplate outside_errors/>
            }
            .into_view()
        }>
            <Routes>
                <Route path="" view=RulesPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn RulesPage() -> impl IntoView {
    let scroll = create_rw_signal(ScrollState::default());
    let config = TrackerConfig::default();

    let track = move || {
        let metrics = match dom::scroll_metrics() {
            Ok(metrics) => metrics,
            Err(err) => {
                log::debug!("skipping scroll update: {}", err);
                return;
            }
        };
        let anchors = dom::section_anchors();
        scroll.update(|state| *state = state.on_scroll(&metrics, &anchors, &config));
    };

    // effects only run in the browser, after the sections are mounted
    create_effect(move |_| {
        track();
        let handle = window_event_listener(ev::scroll, move |_| track());
        on_cleanup(move || handle.remove());
    });

    let active = Signal::derive(move || scroll.get().active);
    let navigate = move |section: Section| dom::scroll_to_section(section.id(), &config);

    view! {
        <div class="app">
            <div class="progress-bar" style=move || scroll.get().progress_style()/>

            <Header/>
            <Hero/>

            <main class="main">
                <Sidebar active on_navigate=navigate/>
                <div class="content">
                    <Intro/>
                    <Principles/>
                    <Players/>
                    <Moderators/>
                    <Faq/>
                </div>
            </main>

            <Footer/>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="container">
                <Logo/>
            </div>
        </header>
    }
}

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo">
            <div class="logo-icon">
                <img src="/teefusion.svg" alt="TeeFusion Logo"/>
            </div>
            <span>"TEE"<strong>"FUSION"</strong></span>
        </div>
    }
}
