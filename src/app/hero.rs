use super::icons::{Heart, Shield, Users};
use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-glow"/>
            <div class="container">
                <h1>"Правила TeeFusion"</h1>
                <p class="hero-subtitle">
                    "Мы создали эти правила не для ограничений, а чтобы "
                    <strong>"защитить твой комфорт"</strong>
                    " и сделать игру честной для каждого."
                </p>
                <div class="hero-stats">
                    <div class="stat">
                        <Shield/>
                        <span>"Честная игра"</span>
                    </div>
                    <div class="stat">
                        <Heart/>
                        <span>"Ламповая атмосфера"</span>
                    </div>
                    <div class="stat">
                        <Users/>
                        <span>"Справедливость для всех"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
