use super::blocks::{ContentSection, InfoBlock, PrincipleCard};
use super::icons::{Heart, Shield, Users};
use super::term::Term;
use crate::sections::Section;
use leptos::*;

#[component]
pub fn Intro() -> impl IntoView {
    view! {
        <ContentSection section=Section::Intro>
            <InfoBlock>
                <p>
                    <strong>"TeeFusion"</strong>
                    " — это не просто сервер. Это "
                    <strong>"твоё пространство"</strong>
                    ", где ты можешь играть, не отвлекаясь на "
                    <Term term="читеров">"читеров"</Term>
                    ", "
                    <Term term="токсиков">"токсиков"</Term>
                    " и хаос."
                </p>
                <p>"Эти правила созданы, чтобы:"</p>
                <ul>
                    <li>
                        <strong>"Защитить твоё время"</strong>
                        " — Никаких "
                        <Term term="читеров">"читеров"</Term>
                        ", которые обесценивают твои победы"
                    </li>
                    <li>
                        <strong>"Сохранить честную игру"</strong>
                        " — Твой скилл = твои достижения"
                    </li>
                    <li>
                        <strong>"Создать ламповую атмосферу"</strong>
                        " — Общение без "
                        <Term term="токсичности">"токсичности"</Term>
                        " и драмы"
                    </li>
                </ul>
            </InfoBlock>

            <p>
                "Мы понимаем: правила могут казаться ограничениями. Но на самом деле они "
                <strong>"дают тебе свободу"</strong>
                " — свободу играть в комфортной среде, где каждый уважает других."
            </p>
        </ContentSection>
    }
}

#[component]
pub fn Principles() -> impl IntoView {
    view! {
        <ContentSection section=Section::Principles>
            <div class="principles-grid">
                <PrincipleCard
                    icon={view! { <Shield size=32/> }.into_view()}
                    title="Честность"
                    description="Читы = обман себя. Настоящий скилл проявляется только в честной игре."
                />
                <PrincipleCard
                    icon={view! { <Heart size=32/> }.into_view()}
                    title="Уважение"
                    description="Токсичность убивает удовольствие от игры. Мы ценим атмосферу, где приятно находиться."
                />
                <PrincipleCard
                    icon={view! { <Users size=32/> }.into_view()}
                    title="Порядок"
                    description="Правила одинаковы для всех. Без исключений, без фаворитов."
                />
            </div>
        </ContentSection>
    }
}
