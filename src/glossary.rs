use crate::config::MISSING_DEFINITION;

const DEFINITIONS: &[(&str, &str)] = &[
    (
        "читов",
        "Программы или модификации, дающие нечестное преимущество в игре",
    ),
    (
        "читеров",
        "Игроки, использующие программы для нечестного преимущества",
    ),
    (
        "токсичность",
        "Оскорбления, провокации, негативное поведение, портящее атмосферу",
    ),
    (
        "токсиков",
        "Игроки, которые оскорбляют других и создают неприятную атмосферу",
    ),
    ("спам", "Повторяющиеся однотипные сообщения, засоряющие чат"),
    ("фарм", "Искусственное накручивание игровой валюты или прогресса"),
    ("rcon", "Remote Console — панель управления сервером для модераторов"),
    (
        "ddos",
        "Атака на сервер большим количеством запросов для его отключения",
    ),
];

/// Looks up the definition shown in a term's tooltip.
pub fn lookup(term: &str) -> Option<&'static str> {
    DEFINITIONS
        .iter()
        .find(|(key, _)| *key == term)
        .map(|(_, definition)| *definition)
}

/// Like [`lookup`], falling back to a placeholder for unknown terms.
pub fn definition(term: &str) -> &'static str {
    lookup(term).unwrap_or(MISSING_DEFINITION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_terms_resolve() {
        assert_eq!(
            definition("rcon"),
            "Remote Console — панель управления сервером для модераторов"
        );
        assert!(lookup("спам").is_some());
    }

    #[test]
    fn unknown_terms_fall_back() {
        assert_eq!(lookup("токсичности"), None);
        assert_eq!(definition("токсичности"), "Определение недоступно");
        assert_eq!(definition(""), MISSING_DEFINITION);
    }

    #[test]
    fn keys_are_unique() {
        for (i, (key, _)) in DEFINITIONS.iter().enumerate() {
            assert!(DEFINITIONS[i + 1..].iter().all(|(other, _)| other != key));
        }
    }
}
