use super::config::RecommendationWeights;
use super::domain::{OpportunityListing, ScoredOpportunity, StudentProfile};
use super::similarity::{NaiveSubstring, Similarity};

const INTERNSHIP_TYPE: &str = "Internship";
const INTERNSHIP_KEYWORD: &str = "internship";

/// Ranks opportunity listings by relevance to a student.
#[derive(Debug, Clone)]
pub struct OpportunityRecommender<S = NaiveSubstring> {
    weights: RecommendationWeights,
    similarity: S,
}

impl OpportunityRecommender<NaiveSubstring> {
    pub fn new(weights: RecommendationWeights) -> Self {
        Self::with_similarity(weights, NaiveSubstring)
    }
}

impl Default for OpportunityRecommender<NaiveSubstring> {
    fn default() -> Self {
        Self::new(RecommendationWeights::default())
    }
}

impl<S: Similarity> OpportunityRecommender<S> {
    pub fn with_similarity(weights: RecommendationWeights, similarity: S) -> Self {
        Self {
            weights,
            similarity,
        }
    }

    pub fn weights(&self) -> &RecommendationWeights {
        &self.weights
    }

    /// Scores a single listing without filtering it.
    pub fn score_listing(
        &self,
        student: &StudentProfile,
        listing: &OpportunityListing,
    ) -> ScoredOpportunity {
        let mut reasons = Vec::new();
        let mut total = 0u32;

        let requirement_hits = listing
            .requirements
            .iter()
            .filter(|requirement| {
                student
                    .skills
                    .iter()
                    .any(|skill| self.similarity.contains(requirement, skill))
            })
            .count() as u32;
        if requirement_hits > 0 {
            total = total
                .saturating_add(requirement_hits.saturating_mul(self.weights.requirement_points));
            reasons.push(format!("Matches {requirement_hits} requirement(s)"));
        }

        if student
            .interests
            .iter()
            .any(|interest| self.similarity.overlaps(interest, &listing.domain))
        {
            total = total.saturating_add(self.weights.domain_points);
            reasons.push(format!("Matches your interest in {}", listing.domain));
        }

        if listing.kind == INTERNSHIP_TYPE
            && student
                .goals
                .iter()
                .any(|goal| self.similarity.contains(goal, INTERNSHIP_KEYWORD))
        {
            total = total.saturating_add(self.weights.internship_goal_points);
            reasons.push("Aligns with your internship goals".to_string());
        }

        ScoredOpportunity {
            listing: listing.clone(),
            match_score: total.min(100) as u8,
            match_reasons: reasons,
        }
    }

    /// Drops zero-score listings and orders the rest best first. The sort is stable, so
    /// listings with equal scores keep their input (recency) order.
    pub fn recommend(
        &self,
        student: &StudentProfile,
        listings: &[OpportunityListing],
    ) -> Vec<ScoredOpportunity> {
        let mut scored: Vec<ScoredOpportunity> = listings
            .iter()
            .map(|listing| self.score_listing(student, listing))
            .filter(|scored| scored.match_score > 0)
            .collect();
        scored.sort_by(|left, right| right.match_score.cmp(&left.match_score));
        scored
    }

    pub fn recommend_top(
        &self,
        student: &StudentProfile,
        listings: &[OpportunityListing],
        limit: usize,
    ) -> Vec<ScoredOpportunity> {
        let mut scored = self.recommend(student, listings);
        scored.truncate(limit);
        scored
    }
}

/// Convenience wrapper using the default weights.
pub fn recommend_opportunities(
    student: &StudentProfile,
    listings: &[OpportunityListing],
) -> Vec<ScoredOpportunity> {
    OpportunityRecommender::default().recommend(student, listings)
}
