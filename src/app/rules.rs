use super::blocks::{ContentSection, InfoBlock, ModDuty, Rule, RuleTable};
use super::term::Term;
use super::TELEGRAM_URL;
use crate::sections::Section;
use leptos::*;

#[component]
pub fn Players() -> impl IntoView {
    let chat_rules = vec![
        Rule::new(
            "Ч.1",
            view! { <span>"Упоминание "<Term term="читов">"читов"</Term></span> },
            "100-1000 сек мута (1.67 - 16.67 минут)",
            "Реклама читов провоцирует их использование",
        ),
        Rule::new(
            "Ч.2",
            view! { <span><Term term="спам">"Спам"</Term>"/флуд"</span> },
            "100-1250 сек мута (1.67 - 20.83 минут)",
            "Спам мешает нормальному общению",
        ),
        Rule::new(
            "Ч.3",
            view! { <span>"Оскорбления/"<Term term="токсичность">"токсичность"</Term>"/провокации"</span> },
            "100-2500 сек мута (1.67 - 41.67 минут)",
            "Оскорбления создают токсичную атмосферу, провокации разжигают конфликты",
        ),
    ];

    let ban_rules = vec![
        Rule::new(
            "Б.1",
            view! { <span>"Использование "<Term term="читов">"читов"</Term></span> },
            "10000 минут",
            "Читы обесценивают достижения честных игроков",
        ),
        Rule::new(
            "Б.2",
            "Обход бана",
            "Удвоение срока",
            "Игнорирование наказания = неуважение к правилам",
        ),
        Rule::new(
            "Б.3",
            view! { <span>"Нечестный "<Term term="фарм">"фарм"</Term>" валюты"</span> },
            "3000 минут + обнуление",
            "Накрутка прогресса = обман системы",
        ),
        Rule::new(
            "Б.4",
            view! {
                <span>
                    "Попытки взлома (Взломы и передача аккаунтов, "
                    <Term term="ddos">"DDoS"</Term>
                    ", причинение вреда серверам)"
                </span>
            },
            "Перманентный бан",
            "Угроза безопасности всего сервера, нарушение экономики, нарушение работы сервиса",
        ),
    ];

    view! {
        <ContentSection section=Section::Players>
            <h3>"Правила чата"</h3>
            <InfoBlock variant="blue">
                <h4>"Почему мы ограничиваем чат?"</h4>
                <p>
                    "Чат — это часть игрового процесса. Когда в нём "
                    <Term term="спам">"спам"</Term>
                    ", оскорбления или "
                    <Term term="токсичность">"токсичность"</Term>
                    ", это "
                    <strong>"отвлекает от игры"</strong>
                    " и портит атмосферу."
                </p>
                <p>
                    <strong>"Альтернатива:"</strong>
                    " Хочешь пообщаться, пошутить, обсудить игру? Добро пожаловать в наш "
                    <a href=TELEGRAM_URL target="_blank" rel="noopener noreferrer">"Telegram-чат"</a>
                    "!"
                </p>
            </InfoBlock>

            <RuleTable title="Что нельзя в чате" rules=chat_rules/>

            <h3>"Баны (серьёзные нарушения)"</h3>
            <InfoBlock variant="red">
                <h4>"Почему мы баним?"</h4>
                <p>
                    "Бан получают за грубые нарушения: использование "
                    <Term term="читов">"читов"</Term>
                    ", обход бана, нечестный "
                    <Term term="фарм">"фарм"</Term>
                    " и попытки взлома. Эти действия "
                    <strong>"разрушают доверие"</strong>
                    " и портят игру для всех остальных."
                </p>
            </InfoBlock>

            <RuleTable title="Что приводит к бану" rules=ban_rules/>

            <InfoBlock variant="green">
                <h4>"Я считаю, что модерация ошиблась. Что мне делать?"</h4>
                <p>
                    "Мы понимаем: ошибки случаются. Если считаешь, что наказание было несправедливым, ты можешь "
                    <strong>"подать апелляцию"</strong>
                    " в нашем "
                    <a href=TELEGRAM_URL target="_blank" rel="noopener noreferrer">"Telegram"</a>
                    "."
                </p>
            </InfoBlock>
        </ContentSection>
    }
}

#[component]
pub fn Moderators() -> impl IntoView {
    let moderator_rules = vec![
        Rule::new(
            "М.1",
            "Неуважение к игрокам",
            "Предупреждение",
            "Модератор обязан быть примером",
        ),
        Rule::new(
            "М.2",
            "Злоупотребление полномочиями",
            "Выговор",
            "Абуз команд разрушает доверие",
        ),
        Rule::new(
            "М.3",
            "Фаворитизм",
            "Предупреждение",
            "Правила должны быть равны для всех",
        ),
        Rule::new(
            "М.4",
            "Бездействие",
            "Предупреждение → Выговор",
            "Модератор, который не работает — не модератор",
        ),
        Rule::new(
            "М.5",
            "Необоснованные обвинения",
            "Предупреждение",
            "Ложные обвинения в читерстве без доказательств недопустимы",
        ),
    ];

    view! {
        <ContentSection section=Section::Moderators>
            <InfoBlock variant="purple">
                <h4>"Для модераторов"</h4>
                <p>
                    <strong>"Модерация"</strong>
                    " — это привилегия, повод для гордости от причастности к развитию проекта, его поддержке и личного вклада. А также "
                    <strong>"личной ответственности и обязанностей"</strong>
                    ", как представителя команды "
                    <strong>"TeeFusion"</strong>
                    "."
                </p>
                <p class="signature">"© Zavo. Директор команды TeeFusion."</p>
            </InfoBlock>

            <h3>"Обязанности модератора"</h3>
            <div class="mod-duties">
                <ModDuty number=1 title="Оперативность">
                    <strong>"Правило 5 минут:"</strong>
                    " Наказание должно быть выдано в течение 5 минут после обнаружения нарушения. Задержка = бездействие."
                </ModDuty>
                <ModDuty number=2 title="Справедливость">
                    <strong>"Никакого фаворитизма:"</strong>
                    " Друг нарушил правило? Выдавай наказание. Правила одинаковы для всех."
                </ModDuty>
                <ModDuty number=3 title="Документирование">
                    <strong>"Записывай всё:"</strong>
                    " Обнаружил бага? Зафиксируй, выдай наказание, сообщи разработчикам."
                </ModDuty>
                <ModDuty number=4 title="Уважение">
                    <strong>"Ты — пример:"</strong>
                    " Оскорбления, "
                    <Term term="токсичность">"токсичность"</Term>
                    ", абуз команд — для модератора это конец сотрудничества."
                </ModDuty>
            </div>

            <h3>"Что запрещено модераторам"</h3>
            <RuleTable title="Нарушения модераторов" rules=moderator_rules/>

            <InfoBlock variant="red">
                <h4>"Система наказаний для модераторов"</h4>
                <div class="penalty">
                    <p><strong>"Предупреждение"</strong>" (устное замечание):"</p>
                    <ul>
                        <li>"Копится до "<strong>"3 предупреждений = 1 Выговор"</strong></li>
                        <li>"Не ограничивает доступ к "<Term term="rcon">"RCon"</Term></li>
                    </ul>
                </div>
                <div class="penalty">
                    <p><strong>"Выговор"</strong>" (официальное взыскание):"</p>
                    <ul>
                        <li>
                            <strong>"Отзыв прав на 3 суток"</strong>
                            " (без доступа к "
                            <Term term="rcon">"RCon"</Term>
                            ")"
                        </li>
                        <li>"Срок действия: "<strong>"3 месяца"</strong></li>
                        <li>
                            <strong>"3 активных выговора"</strong>
                            " или "
                            <strong>"5 выговоров за всё время"</strong>
                            " = прекращение сотрудничества"
                        </li>
                    </ul>
                </div>
            </InfoBlock>
        </ContentSection>
    }
}
