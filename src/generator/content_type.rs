use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Puns,
    Jokes,
    Wordplay,
    Riddles,
    Epigrams,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        Self::Puns,
        Self::Jokes,
        Self::Wordplay,
        Self::Riddles,
        Self::Epigrams,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Puns => "puns",
            Self::Jokes => "jokes",
            Self::Wordplay => "wordplay",
            Self::Riddles => "riddles",
            Self::Epigrams => "epigrams",
        }
    }

    /// Exact tag lookup. Returns `None` for anything that is not one of the
    /// five lowercase tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Maps any tag to a content type, substituting [`ContentType::Puns`] for
    /// unknown tags. The boolean reports whether the tag was recognized.
    pub fn normalize(tag: &str) -> (Self, bool) {
        match Self::from_tag(tag) {
            Some(kind) => (kind, true),
            None => (Self::Puns, false),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
