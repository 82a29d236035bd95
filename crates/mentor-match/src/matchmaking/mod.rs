//! Mentor matching, opportunity recommendations, and the engagement rollup.
//!
//! The scoring engines (`matcher`, `recommender`, `analytics`) are pure functions over
//! plain records. `service` and `router` wire them to a [`DirectoryStore`] implementation
//! supplied by the host application.

pub mod analytics;
pub mod config;
pub mod directory;
pub mod domain;
pub mod fixtures;
pub mod matcher;
pub mod recommender;
pub mod router;
pub mod service;
pub mod similarity;

#[cfg(test)]
mod tests;

pub use analytics::{
    generate_analytics, AnalyticsAggregator, AnalyticsInput, AnalyticsSnapshot, DailyEngagement,
    SkillCount,
};
pub use config::{AnalyticsSettings, MatchWeights, MatchmakingConfig, RecommendationWeights};
pub use directory::{
    Booking, DirectoryError, DirectoryStore, MatchEvent, MentorshipSlot, SessionRecord,
    SessionStatus,
};
pub use domain::{
    MatchCategory, MatchExplanation, MatchResult, MatchTier, MentorFilter, MentorProfile,
    OpportunityId, OpportunityListing, RankedMentor, ScoredOpportunity, SlotId, StudentProfile, UserId,
    BOOKABLE_SCORE,
};
pub use matcher::{match_score, parse_years, ProfileMatcher};
pub use recommender::{recommend_opportunities, OpportunityRecommender};
pub use router::matchmaking_router;
pub use service::{MatchmakingService, ServiceError};
pub use similarity::{NaiveSubstring, Similarity};
