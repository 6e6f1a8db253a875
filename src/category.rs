use lazy_static::lazy_static;
use std::{collections::HashMap, fmt};

/// Product Hunt categories the skill knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tech,
    Games,
    Podcasts,
    Books,
}

lazy_static! {
    /// Spoken variants, matched exactly as the platform hands them over.
    static ref ALIASES: HashMap<&'static str, Category> = {
        let mut m = HashMap::new();
        m.insert("tech", Category::Tech);
        m.insert("technology", Category::Tech);
        m.insert("games", Category::Games);
        m.insert("game", Category::Games);
        m.insert("gaming", Category::Games);
        m.insert("podcasts", Category::Podcasts);
        m.insert("podcast", Category::Podcasts);
        m.insert("podcasting", Category::Podcasts);
        m.insert("books", Category::Books);
        m.insert("book", Category::Books);
        m
    };
}

impl Category {
    /// Maps a slot value onto a category. `None` means the word isn't one we
    /// know, which the caller answers with a clarification.
    pub fn resolve(raw: &str) -> Option<Category> {
        ALIASES.get(raw).copied()
    }

    /// Path segment used by the Product Hunt API.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Games => "games",
            Category::Podcasts => "podcasts",
            Category::Books => "books",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
