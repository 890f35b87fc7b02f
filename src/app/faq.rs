use super::blocks::ContentSection;
use super::term::Term;
use super::TELEGRAM_URL;
use crate::sections::Section;
use leptos::*;

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <ContentSection section=Section::Faq>
            <FaqItem question="Как работает система наказаний для модераторов?">
                <div>
                    <p><strong>"Предупреждение:"</strong></p>
                    <ul class="faq-list">
                        <li>"Выдаётся за мелкие нарушения"</li>
                        <li>"3 предупреждения = 1 Выговор"</li>
                        <li>"Не влияет на доступ к "<Term term="rcon">"RCon"</Term></li>
                    </ul>

                    <p><strong>"Выговор:"</strong></p>
                    <ul class="faq-list">
                        <li>"Отзыв прав на 3 суток"</li>
                        <li>"Срок действия: 3 месяца"</li>
                        <li>"3 активных выговора или 5 за всё время = увольнение"</li>
                    </ul>

                    <p>
                        <strong>"Пример:"</strong>
                        " Модератор получил 2 предупреждения (ничего не происходит). Получил 3-е предупреждение → автоматически получает Выговор → теряет доступ к "
                        <Term term="rcon">"RCon"</Term>
                        " на 3 суток."
                    </p>
                </div>
            </FaqItem>

            <FaqItem question="Что делать, если меня несправедливо забанили?">
                "Подай апелляцию в нашем Telegram-чате. Укажи ник, причину бана и почему считаешь его несправедливым. Мы рассмотрим твою заявку в течение 24 часов."
            </FaqItem>

            <FaqItem question="Можно ли обсуждать игру в чате?">
                "Да! Обсуждение игры, стратегий, помощь новичкам — всё это приветствуется. Запрещены только оскорбления, спам и токсичность."
            </FaqItem>

            <FaqItem question="Почему модераторы не отвечают?">
                <span>
                    "Модераторы обязаны реагировать на нарушения в течение 5 минут. Если модератор бездействует, сообщи об этом в "
                    <a href=TELEGRAM_URL target="_blank" rel="noopener noreferrer">"Telegram"</a>
                    " — это серьёзное нарушение, которое карается Предупреждением."
                </span>
            </FaqItem>

            <FaqItem question="Где можно пообщаться вне игры?">
                <span>
                    "Добро пожаловать в наш "
                    <a href=TELEGRAM_URL target="_blank" rel="noopener noreferrer">"Telegram-чат"</a>
                    "! Там можно шутить, обсуждать игру и просто общаться."
                </span>
            </FaqItem>
        </ContentSection>
    }
}

#[component]
pub fn FaqItem(question: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="faq-item">
            <h4>{question}</h4>
            <div class="a">{children()}</div>
        </div>
    }
}
