use serde::Serialize;

use super::{LengthPreference, SelectionList, Show, ToggleOutcome};

/// Number of reference shows a finished profile carries
pub const REFERENCE_SHOW_CAPACITY: usize = 3;

/// The profile being assembled by the quiz
///
/// Mutated only through the toggle/set operations below; completeness is a
/// pure function of the three fields and is recomputed on every call rather
/// than stored.
#[derive(Debug, Clone, Serialize)]
pub struct QuizAnswer {
    genres: SelectionList<String>,
    length: Option<LengthPreference>,
    reference_shows: SelectionList<Show>,
}

impl Default for QuizAnswer {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizAnswer {
    /// Creates an empty profile
    pub fn new() -> Self {
        Self {
            genres: SelectionList::unbounded(),
            length: None,
            reference_shows: SelectionList::bounded(REFERENCE_SHOW_CAPACITY),
        }
    }

    /// Adds the genre if absent, removes it if present
    pub fn toggle_genre(&mut self, label: String) -> ToggleOutcome {
        self.genres.toggle(label)
    }

    /// Replaces any previous length preference
    pub fn set_length(&mut self, preference: LengthPreference) {
        self.length = Some(preference);
    }

    /// Toggles a show in the reference selection, capped at three entries
    pub fn toggle_show(&mut self, show: Show) -> ToggleOutcome {
        self.reference_shows.toggle(show)
    }

    pub fn genres(&self) -> &[String] {
        self.genres.items()
    }

    pub fn length(&self) -> Option<LengthPreference> {
        self.length
    }

    pub fn reference_shows(&self) -> &[Show] {
        self.reference_shows.items()
    }

    /// Ordered display names of the chosen shows; the shape handed downstream
    pub fn reference_show_names(&self) -> Vec<String> {
        self.reference_shows
            .items()
            .iter()
            .map(|show| show.name.clone())
            .collect()
    }

    /// The completion gate: at least one genre, a length preference, and
    /// exactly three reference shows
    pub fn is_complete(&self) -> bool {
        !self.genres.is_empty()
            && self.length.is_some()
            && self.reference_shows.len() == REFERENCE_SHOW_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(n: usize) -> Show {
        Show::new(n.to_string(), format!("Show {}", n))
    }

    #[test]
    fn test_new_answer_is_incomplete() {
        let answer = QuizAnswer::new();
        assert!(answer.genres().is_empty());
        assert_eq!(answer.length(), None);
        assert!(answer.reference_shows().is_empty());
        assert!(!answer.is_complete());
    }

    #[test]
    fn test_set_length_is_idempotent() {
        let mut answer = QuizAnswer::new();
        answer.set_length(LengthPreference::ShortRun);
        let once = answer.clone();

        answer.set_length(LengthPreference::ShortRun);
        assert_eq!(answer.length(), once.length());
    }

    #[test]
    fn test_set_length_replaces_previous_choice() {
        let mut answer = QuizAnswer::new();
        answer.set_length(LengthPreference::LimitedSeries);
        answer.set_length(LengthPreference::NoPreference);
        assert_eq!(answer.length(), Some(LengthPreference::NoPreference));
    }

    #[test]
    fn test_completion_gate_truth_table() {
        // complete iff genres non-empty AND length set AND exactly 3 shows
        for genre_count in [0usize, 1] {
            for has_length in [false, true] {
                for show_count in [0usize, 1, 2, 3] {
                    let mut answer = QuizAnswer::new();
                    for g in 0..genre_count {
                        answer.toggle_genre(format!("Genre {}", g));
                    }
                    if has_length {
                        answer.set_length(LengthPreference::LongRun);
                    }
                    for n in 0..show_count {
                        answer.toggle_show(show(n));
                    }

                    let expected = genre_count > 0 && has_length && show_count == 3;
                    assert_eq!(
                        answer.is_complete(),
                        expected,
                        "genres={} length={} shows={}",
                        genre_count,
                        has_length,
                        show_count
                    );
                }
            }
        }
    }

    #[test]
    fn test_more_than_three_shows_is_unrepresentable() {
        let mut answer = QuizAnswer::new();
        answer.toggle_genre("Comedy".to_string());
        answer.set_length(LengthPreference::ShortRun);
        for n in 0..6 {
            answer.toggle_show(show(n));
        }

        assert_eq!(answer.reference_shows().len(), 3);
        assert!(answer.is_complete());
    }

    #[test]
    fn test_reference_show_names_preserve_selection_order() {
        let mut answer = QuizAnswer::new();
        answer.toggle_show(Show::new("b", "Beta"));
        answer.toggle_show(Show::new("a", "Alpha"));
        answer.toggle_show(Show::new("c", "Gamma"));

        assert_eq!(answer.reference_show_names(), vec!["Beta", "Alpha", "Gamma"]);
    }

    #[test]
    fn test_deselecting_a_show_breaks_completeness() {
        let mut answer = QuizAnswer::new();
        answer.toggle_genre("Drama".to_string());
        answer.set_length(LengthPreference::LongRun);
        for n in 0..3 {
            answer.toggle_show(show(n));
        }
        assert!(answer.is_complete());

        answer.toggle_show(show(1));
        assert!(!answer.is_complete());
        assert_eq!(answer.reference_shows().len(), 2);
    }
}
