use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Genres offered by the quiz form
pub const GENRES: [&str; 9] = [
    "Action", "Comedy", "Drama", "Fantasy", "Horror", "Mystery", "Romance", "Sci-Fi", "Thriller",
];

/// A TV show as returned by the show query service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    /// Provider-assigned identifier, opaque and stable
    pub id: String,
    /// Display name
    pub name: String,
    /// Whatever else the query service returned; carried through uninterpreted
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

// Selection membership is keyed by id; metadata never participates.
impl PartialEq for Show {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Show {}

impl Show {
    /// Creates a show with no extra metadata
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metadata: Map::new(),
        }
    }
}

/// Preferred show length, single-select
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LengthPreference {
    LimitedSeries,
    ShortRun,
    LongRun,
    NoPreference,
}

impl LengthPreference {
    /// All options, in the order the form presents them
    pub const ALL: [LengthPreference; 4] = [
        LengthPreference::LimitedSeries,
        LengthPreference::ShortRun,
        LengthPreference::LongRun,
        LengthPreference::NoPreference,
    ];

    /// Human-readable label for rendering the form
    pub fn label(&self) -> &'static str {
        match self {
            LengthPreference::LimitedSeries => "Limited Series (no longer than one season)",
            LengthPreference::ShortRun => "1-3 Seasons",
            LengthPreference::LongRun => "3+ Seasons",
            LengthPreference::NoPreference => "Doesn\u{2019}t matter to me!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_equality_keyed_by_id() {
        let mut a = Show::new("42", "Severance");
        let b = Show::new("42", "Severance (remaster)");
        a.metadata
            .insert("language".to_string(), Value::String("English".to_string()));

        assert_eq!(a, b);
        assert_ne!(a, Show::new("43", "Severance"));
    }

    #[test]
    fn test_show_metadata_flattening() {
        let json = r#"{"id":"169","name":"Breaking Bad","language":"English","premiered":"2008-01-20"}"#;
        let show: Show = serde_json::from_str(json).unwrap();

        assert_eq!(show.id, "169");
        assert_eq!(show.name, "Breaking Bad");
        assert_eq!(show.metadata.get("language").unwrap(), "English");

        // Round-trips with the metadata back at the top level
        let back = serde_json::to_value(&show).unwrap();
        assert_eq!(back["premiered"], "2008-01-20");
    }

    #[test]
    fn test_length_preference_serialization() {
        let short_run = serde_json::to_string(&LengthPreference::ShortRun).unwrap();
        let no_preference = serde_json::to_string(&LengthPreference::NoPreference).unwrap();

        assert_eq!(short_run, "\"short_run\"");
        assert_eq!(no_preference, "\"no_preference\"");
    }

    #[test]
    fn test_no_preference_label_keeps_the_curly_apostrophe() {
        // The form renders this label verbatim
        assert_eq!(
            LengthPreference::NoPreference.label(),
            "Doesn\u{2019}t matter to me!"
        );
        assert!(LengthPreference::NoPreference.label().contains('\u{2019}'));
    }

    #[test]
    fn test_length_preference_labels_are_distinct() {
        let labels: Vec<&str> = LengthPreference::ALL.iter().map(|l| l.label()).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label));
        }
    }
}
