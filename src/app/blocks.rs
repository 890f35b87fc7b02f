use crate::sections::Section;
use leptos::*;

#[component]
pub fn ContentSection(section: Section, children: Children) -> impl IntoView {
    view! {
        <section id=section.id() class="section">
            <h2>{section.title()}</h2>
            {children()}
        </section>
    }
}

#[component]
pub fn InfoBlock(
    #[prop(default = "default")] variant: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("info-block info-block-{}", variant)>
            {children()}
        </div>
    }
}

#[component]
pub fn PrincipleCard(
    icon: View,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="principle-card">
            <div class="principle-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// One row of a [`RuleTable`].
#[derive(Clone)]
pub struct Rule {
    pub code: &'static str,
    pub violation: View,
    pub punishment: &'static str,
    pub why: &'static str,
}

impl Rule {
    pub fn new(
        code: &'static str,
        violation: impl IntoView,
        punishment: &'static str,
        why: &'static str,
    ) -> Self {
        Self {
            code,
            violation: violation.into_view(),
            punishment,
            why,
        }
    }
}

#[component]
pub fn RuleTable(title: &'static str, rules: Vec<Rule>) -> impl IntoView {
    view! {
        <div class="rule-table">
            <h4>{title}</h4>
            <table>
                <thead>
                    <tr>
                        <th>"Код"</th>
                        <th>"Нарушение"</th>
                        <th>"Наказание"</th>
                        <th>"Почему запрещено"</th>
                    </tr>
                </thead>
                <tbody>
                    {rules
                        .into_iter()
                        .map(|rule| view! {
                            <tr>
                                <td><span class="rule-code">{rule.code}</span></td>
                                <td>{rule.violation}</td>
                                <td>{rule.punishment}</td>
                                <td class="rule-why">{rule.why}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn ModDuty(number: u8, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="mod-duty">
            <div class="mod-duty-number">{number}</div>
            <div>
                <h4>{title}</h4>
                <p>{children()}</p>
            </div>
        </div>
    }
}
