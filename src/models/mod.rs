mod quiz_answer;
mod selection;
mod show;

pub use quiz_answer::{QuizAnswer, REFERENCE_SHOW_CAPACITY};
pub use selection::{SelectionList, ToggleOutcome};
pub use show::{LengthPreference, Show, GENRES};
