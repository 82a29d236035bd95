use serde::{Deserialize, Serialize};

/// Point values for mentor matching. Defaults are the canonical 40/30/30/10 rubric with
/// exact skill equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub skill_points: u32,
    pub skill_cap: u32,
    pub domain_points: u32,
    pub domain_cap: u32,
    pub goal_points: u32,
    pub goal_cap: u32,
    pub experience_bonus: u32,
    pub experience_threshold_years: u32,
    pub max_explanations: usize,
    pub max_matching_skills: usize,
    pub cited_skills: usize,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill_points: 10,
            skill_cap: 40,
            domain_points: 15,
            domain_cap: 30,
            goal_points: 15,
            goal_cap: 30,
            experience_bonus: 10,
            experience_threshold_years: 5,
            max_explanations: 4,
            max_matching_skills: 5,
            cited_skills: 3,
        }
    }
}

impl MatchWeights {
    /// Sum of all category caps before the total is clamped to 100.
    pub fn max_total(&self) -> u32 {
        self.skill_cap
            .saturating_add(self.domain_cap)
            .saturating_add(self.goal_cap)
            .saturating_add(self.experience_bonus)
    }
}

/// Point values for opportunity relevance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationWeights {
    pub requirement_points: u32,
    pub domain_points: u32,
    pub internship_goal_points: u32,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            requirement_points: 20,
            domain_points: 30,
            internship_goal_points: 20,
        }
    }
}

/// Sizing for the analytics rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    pub window_days: u32,
    pub top_skills: usize,
    pub recent_matches: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            window_days: 30,
            top_skills: 5,
            recent_matches: 3,
        }
    }
}

/// Complete rubric handed to the matchmaking service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchmakingConfig {
    pub matching: MatchWeights,
    pub recommendations: RecommendationWeights,
    pub analytics: AnalyticsSettings,
}
