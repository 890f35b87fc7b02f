use super::icons::HelpCircle;
use crate::{
    config::TooltipConfig,
    dom, glossary,
    state::{TooltipEvent, TooltipState},
    tooltip,
};
use leptos::*;

/// An inline jargon word with a definition tooltip.
///
/// Each term owns its refs and state; hovering or focusing the word shows the
/// tooltip, leaving or blurring hides it.
#[component]
pub fn Term(term: &'static str, children: Children) -> impl IntoView {
    let trigger_ref = create_node_ref::<html::Span>();
    let tooltip_ref = create_node_ref::<html::Span>();
    let (state, set_state) = create_signal(TooltipState::default());
    let config = TooltipConfig::default();

    let show = move || {
        let placement = match dom::tooltip_geometry(trigger_ref, tooltip_ref) {
            Ok(geometry) => Some(tooltip::place(&geometry, &config)),
            Err(err) => {
                log::debug!("deferring tooltip placement for {}: {}", term, err);
                None
            }
        };
        set_state.update(|state| *state = state.apply(TooltipEvent::Enter(placement)));
    };
    let hide = move || set_state.update(|state| *state = state.apply(TooltipEvent::Leave));

    let tooltip_classes = move || {
        if state.get().is_visible() {
            "tooltip show"
        } else {
            "tooltip"
        }
    };
    let tooltip_style = move || state.get().position.style();

    view! {
        <span class="term-wrapper">
            <span
                node_ref=trigger_ref
                class="term"
                tabindex="0"
                on:mouseenter=move |_| show()
                on:mouseleave=move |_| hide()
                on:focus=move |_| show()
                on:blur=move |_| hide()
            >
                {children()}
                <HelpCircle size=14 class="term-icon"/>
            </span>
            <span node_ref=tooltip_ref class=tooltip_classes style=tooltip_style role="tooltip">
                {glossary::definition(term)}
            </span>
        </span>
    }
}
