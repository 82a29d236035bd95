use std::collections::HashSet;

use super::config::MatchWeights;
use super::domain::{
    MatchCategory, MatchExplanation, MatchResult, MentorProfile, RankedMentor, StudentProfile,
};
use super::similarity::{NaiveSubstring, Similarity};

/// Scores student/mentor compatibility with additive, independently capped categories.
///
/// Every category can only add points, so adding a matching skill, interest, or goal never
/// lowers a mentor's score. Explanations are emitted in the fixed category order
/// (skills, domain, goals, experience) so identical inputs always render identically.
#[derive(Debug, Clone)]
pub struct ProfileMatcher<S = NaiveSubstring> {
    weights: MatchWeights,
    similarity: S,
}

impl ProfileMatcher<NaiveSubstring> {
    pub fn new(weights: MatchWeights) -> Self {
        Self::with_similarity(weights, NaiveSubstring)
    }
}

impl Default for ProfileMatcher<NaiveSubstring> {
    fn default() -> Self {
        Self::new(MatchWeights::default())
    }
}

impl<S: Similarity> ProfileMatcher<S> {
    pub fn with_similarity(weights: MatchWeights, similarity: S) -> Self {
        Self {
            weights,
            similarity,
        }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Null-tolerant entry point: a missing profile yields the neutral zero result.
    pub fn score(
        &self,
        student: Option<&StudentProfile>,
        mentor: Option<&MentorProfile>,
    ) -> MatchResult {
        match (student, mentor) {
            (Some(student), Some(mentor)) => self.match_score(student, mentor),
            _ => MatchResult::default(),
        }
    }

    pub fn match_score(&self, student: &StudentProfile, mentor: &MentorProfile) -> MatchResult {
        let weights = &self.weights;
        let mut explanations = Vec::new();
        let mut total = 0u32;

        let matching: Vec<&String> = distinct(&student.skills)
            .into_iter()
            .filter(|skill| {
                mentor
                    .skills
                    .iter()
                    .any(|candidate| self.similarity.same(skill, candidate))
            })
            .collect();
        if !matching.is_empty() {
            let score = capped(matching.len() as u32, weights.skill_points, weights.skill_cap);
            let cited: Vec<&str> = matching
                .iter()
                .take(weights.cited_skills)
                .map(|skill| skill.as_str())
                .collect();
            explanations.push(explain(
                MatchCategory::Skills,
                score,
                weights.skill_cap,
                format!("{} matching skill(s): {}", matching.len(), cited.join(", ")),
            ));
            total = total.saturating_add(score);
        }

        let domain_hits: u32 = distinct(&student.interests)
            .into_iter()
            .map(|interest| self.similarity.containment_hits(interest, &mentor.domain))
            .fold(0u32, u32::saturating_add);
        if domain_hits > 0 {
            let score = capped(domain_hits, weights.domain_points, weights.domain_cap);
            explanations.push(explain(
                MatchCategory::Domain,
                score,
                weights.domain_cap,
                format!("Domain expertise in {}", mentor.domain),
            ));
            total = total.saturating_add(score);
        }

        let goal_hits: u32 = distinct(&student.goals)
            .into_iter()
            .map(|goal| {
                mentor
                    .expertise
                    .iter()
                    .map(|area| self.similarity.containment_hits(goal, area))
                    .max()
                    .unwrap_or(0)
            })
            .fold(0u32, u32::saturating_add);
        if goal_hits > 0 {
            let score = capped(goal_hits, weights.goal_points, weights.goal_cap);
            explanations.push(explain(
                MatchCategory::Goals,
                score,
                weights.goal_cap,
                "Career goals align with mentor expertise".to_string(),
            ));
            total = total.saturating_add(score);
        }

        // Experience only boosts a mentor who already overlaps with the student.
        if explanations.is_empty() {
            return MatchResult::default();
        }

        if parse_years(&mentor.experience) >= weights.experience_threshold_years {
            explanations.push(explain(
                MatchCategory::Experience,
                weights.experience_bonus,
                weights.experience_bonus,
                format!("{} of industry experience", mentor.experience),
            ));
            total = total.saturating_add(weights.experience_bonus);
        }

        explanations.truncate(weights.max_explanations);

        MatchResult {
            score: total.min(100) as u8,
            explanations,
            matching_skills: matching
                .into_iter()
                .take(weights.max_matching_skills)
                .cloned()
                .collect(),
        }
    }

    /// Scores every mentor and orders them best first. Equal scores keep input order.
    pub fn rank_mentors(
        &self,
        student: &StudentProfile,
        mentors: impl IntoIterator<Item = MentorProfile>,
    ) -> Vec<RankedMentor> {
        let mut ranked: Vec<RankedMentor> = mentors
            .into_iter()
            .map(|mentor| {
                let result = self.match_score(student, &mentor);
                RankedMentor::new(mentor, result)
            })
            .collect();
        ranked.sort_by(|left, right| right.result.score.cmp(&left.result.score));
        ranked
    }
}

/// Convenience wrapper using the default rubric.
pub fn match_score(student: &StudentProfile, mentor: &MentorProfile) -> MatchResult {
    ProfileMatcher::default().match_score(student, mentor)
}

/// Reads the leading integer of strings like "5 years". Anything else is zero.
pub fn parse_years(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('-') {
        return 0;
    }
    trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |years, digit| {
            years
                .saturating_mul(10)
                .saturating_add(u32::from(digit - b'0'))
        })
}

/// Case-insensitive repeats are dropped; the first spelling wins.
fn distinct(values: &[String]) -> Vec<&String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|value| seen.insert(value.to_lowercase()))
        .collect()
}

fn capped(hits: u32, points: u32, cap: u32) -> u32 {
    hits.saturating_mul(points).min(cap)
}

fn explain(category: MatchCategory, score: u32, cap: u32, description: String) -> MatchExplanation {
    let normalized = if cap == 0 {
        0
    } else {
        ((f64::from(score) / f64::from(cap)) * 100.0).round().min(100.0) as u8
    };
    MatchExplanation {
        category,
        score: normalized,
        description,
    }
}
