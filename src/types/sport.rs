use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    Running,
    Cycling,
    MountainBiking,
    GravelCycling,
    Hiking,
    TrailRunning,
    Skiing,
    Snowboarding,
    Other,
}

// First matching token wins, so the specific labels sit above the generic
// ones: "trail_running" must not fall through to "run", nor
// "gravel_cycling" to "cycling".
const SPORT_TOKENS: &[(&str, SportType)] = &[
    ("trail_run", SportType::TrailRunning),
    ("mtb", SportType::MountainBiking),
    ("mountain_biking", SportType::MountainBiking),
    ("gravel", SportType::GravelCycling),
    ("snowboard", SportType::Snowboarding),
    ("ski", SportType::Skiing),
    ("run", SportType::Running),
    ("ride", SportType::Cycling),
    ("cycling", SportType::Cycling),
    ("hike", SportType::Hiking),
    ("walk", SportType::Hiking),
];

/// Maps a free-text sport label from a source file onto the closed sport
/// enumeration. Total: unknown, empty, and absent labels all yield `Other`.
pub fn classify(label: Option<&str>) -> SportType {
    let Some(label) = label else {
        return SportType::Other;
    };
    let label = label.to_lowercase();
    for (token, sport) in SPORT_TOKENS {
        if label.contains(token) {
            return *sport;
        }
    }
    SportType::Other
}

impl SportType {
    /// Fixed display color per sport, so activities of the same sport render
    /// identically in the map and list views.
    pub fn color(self) -> &'static str {
        match self {
            SportType::Running => "#e64545",
            SportType::Cycling => "#1f77e0",
            SportType::MountainBiking => "#7048b6",
            SportType::GravelCycling => "#c77d2d",
            SportType::Hiking => "#2d9e4f",
            SportType::TrailRunning => "#b23c17",
            SportType::Skiing => "#35b5c4",
            SportType::Snowboarding => "#3558c4",
            SportType::Other => "#808a93",
        }
    }
}
