//! Fixed course records searched by the overlay, plus the trending terms it
//! suggests before anything is typed.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// CSS class for the level badge on course cards.
    pub fn badge_class(self) -> &'static str {
        match self {
            Level::Beginner => "badge-success",
            Level::Intermediate => "badge-warning",
            Level::Advanced => "badge-destructive",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub level: Level,
    pub rating: f32,
}

impl CatalogEntry {
    /// Case-insensitive substring match against title, description and
    /// category. `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [self.title, self.description, self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: 1,
        title: "Machine Learning Fundamentals",
        description: "Learn the basics of ML algorithms and applications",
        category: "AI & ML",
        duration: "8 weeks",
        level: Level::Beginner,
        rating: 4.8,
    },
    CatalogEntry {
        id: 2,
        title: "Data Analysis with Python",
        description: "Master data analysis using Python libraries",
        category: "Data Science",
        duration: "6 weeks",
        level: Level::Intermediate,
        rating: 4.7,
    },
    CatalogEntry {
        id: 3,
        title: "Blockchain Development",
        description: "Build decentralized applications on blockchain",
        category: "Blockchain",
        duration: "10 weeks",
        level: Level::Advanced,
        rating: 4.9,
    },
];

pub static TRENDING_SEARCHES: &[&str] = &[
    "Machine Learning",
    "Python Programming",
    "Data Science",
    "Blockchain",
    "AI Ethics",
    "Web Development",
];

/// Entries of `catalog` matching `query`, in catalog order.
pub fn search(catalog: &'static [CatalogEntry], query: &str) -> Vec<&'static CatalogEntry> {
    let needle = query.to_lowercase();
    catalog.iter().filter(|entry| entry.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(entries: &[&CatalogEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.title).collect()
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        assert_eq!(titles(&search(CATALOG, "BLOCK")), vec!["Blockchain Development"]);
        assert_eq!(titles(&search(CATALOG, "data")), vec!["Data Analysis with Python"]);
        // category only
        assert_eq!(titles(&search(CATALOG, "ai & ml")), vec!["Machine Learning Fundamentals"]);
        // description only
        assert_eq!(titles(&search(CATALOG, "decentralized")), vec!["Blockchain Development"]);
    }

    #[test]
    fn keeps_catalog_order() {
        // "learn" hits entry 1 (title + description); "a" hits everything
        assert_eq!(search(CATALOG, "a").iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(search(CATALOG, "learn").iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(search(CATALOG, "quantum").is_empty());
    }

    #[test]
    fn level_labels() {
        assert_eq!(Level::Intermediate.to_string(), "Intermediate");
        assert_eq!(Level::Advanced.badge_class(), "badge-destructive");
    }
}
