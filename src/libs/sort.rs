use serde::{Deserialize, Serialize};

/// One of the four fixed task-list orderings, selectable by a single-letter
/// code. Mode D is the default and the fallback for unrecognized codes,
/// which callers handle at the parsing edge via [`SortMode::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// A: insertion order, no re-sort.
    Insertion,
    /// B: ascending creation time (oldest first).
    CreatedAsc,
    /// C: descending creation time (newest first).
    CreatedDesc,
    /// D: incomplete tasks first, then ascending creation time.
    #[default]
    IncompleteFirst,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Insertion,
        SortMode::CreatedAsc,
        SortMode::CreatedDesc,
        SortMode::IncompleteFirst,
    ];

    /// Parses a single-letter code, case-insensitively. Unrecognized codes
    /// yield `None`; callers fall back to [`SortMode::default`].
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "A" => Some(SortMode::Insertion),
            "B" => Some(SortMode::CreatedAsc),
            "C" => Some(SortMode::CreatedDesc),
            "D" => Some(SortMode::IncompleteFirst),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            SortMode::Insertion => 'A',
            SortMode::CreatedAsc => 'B',
            SortMode::CreatedDesc => 'C',
            SortMode::IncompleteFirst => 'D',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SortMode::Insertion => "Insertion order",
            SortMode::CreatedAsc => "Creation time (oldest first)",
            SortMode::CreatedDesc => "Creation time (newest first)",
            SortMode::IncompleteFirst => "Incomplete first, then by creation time",
        }
    }
}
