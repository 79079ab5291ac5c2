//! Review status catalog.

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parses a status code from the API, if it is a known one
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict text shown to the user
    pub fn verdict(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Reviewing => write!(f, "reviewing"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}
