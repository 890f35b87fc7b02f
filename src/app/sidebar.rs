use super::icons::ChevronRight;
use crate::sections::Section;
use leptos::*;

#[component]
pub fn Sidebar<F>(active: Signal<Option<Section>>, on_navigate: F) -> impl IntoView
where
    F: Fn(Section) + Copy + 'static,
{
    view! {
        <aside class="sidebar">
            <h3>"Содержание"</h3>
            <nav>
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let item_classes = move || {
                            if active.get() == Some(section) {
                                "nav-item active"
                            } else {
                                "nav-item"
                            }
                        };
                        view! {
                            <button type="button" class=item_classes on:click=move |_| on_navigate(section)>
                                <ChevronRight size=16/>
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
