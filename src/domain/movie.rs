use std::fmt;

/// A film that can be scheduled in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub duration_minutes: u32,
    pub rating: String,
    pub genre: String,
    pub director: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        duration_minutes: u32,
        rating: impl Into<String>,
        genre: impl Into<String>,
        director: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            duration_minutes,
            rating: rating.into(),
            genre: genre.into(),
            director: director.into(),
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, directed by {})", self.title, self.genre, self.director)
    }
}
