use std::{fmt, str::FromStr};
use thiserror::Error;

/// The content blocks of the rules page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Intro,
    Principles,
    Players,
    Moderators,
    Faq,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Intro,
        Section::Principles,
        Section::Players,
        Section::Moderators,
        Section::Faq,
    ];

    /// The DOM id of the section's anchor element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Principles => "principles",
            Section::Players => "players",
            Section::Moderators => "moderators",
            Section::Faq => "faq",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Intro => "Зачем эти правила?",
            Section::Principles => "Три принципа",
            Section::Players => "Правила для игроков",
            Section::Moderators => "Правила для модераторов",
            Section::Faq => "Часто задаваемые вопросы",
        }
    }

    /// Heading rendered above the section body.
    pub fn title(self) -> &'static str {
        match self {
            Section::Principles => "Три принципа TeeFusion",
            other => other.label(),
        }
    }

    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_order_matches_position() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.position(), i);
        }
    }

    #[test]
    fn parses_known_ids() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn rejects_unknown_ids() {
        let err = "rules".parse::<Section>().unwrap_err();
        assert_eq!(err, UnknownSection("rules".to_string()));
        assert_eq!(err.to_string(), "unknown section: rules");
    }

    #[test]
    fn title_falls_back_to_label() {
        assert_eq!(Section::Faq.title(), Section::Faq.label());
        assert_eq!(Section::Principles.title(), "Три принципа TeeFusion");
    }
}
