use super::icons::MessageCircle;
use super::{Logo, TELEGRAM_URL};
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <Logo/>
                </div>
                <div class="footer-links">
                    <a href=TELEGRAM_URL target="_blank" rel="noopener noreferrer">
                        <MessageCircle size=18/>
                        "Telegram"
                    </a>
                </div>
                <p class="footer-text">
                    "TeeFusion — независимый проект, созданный для тех, кто ценит честную игру и комфортную атмосферу."
                </p>
                <p class="footer-text">
                    "© "<strong>"TeeFusion"</strong>" 2025. Все права защищены."
                </p>
            </div>
        </footer>
    }
}
