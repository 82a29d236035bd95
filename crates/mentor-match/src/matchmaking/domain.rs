use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier issued by the profile store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

/// Identifier for a posted opportunity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunityId(pub String);

/// Identifier for a bookable mentorship slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Treats an explicit JSON `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Student record as supplied by the profile store. Only the list fields feed scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(default, deserialize_with = "nullable")]
    pub user_id: UserId,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// Alumni record as supplied by the profile store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorProfile {
    #[serde(default, deserialize_with = "nullable")]
    pub user_id: UserId,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub company: String,
    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub expertise: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub domain: String,
    /// Free text such as "5 years"; only the leading integer is read.
    #[serde(default, deserialize_with = "nullable")]
    pub experience: String,
}

/// Posting handed in by the opportunity store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityListing {
    #[serde(default, deserialize_with = "nullable")]
    pub id: OpportunityId,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub company: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub domain: String,
    /// Internship, Fellowship, Research, Job, ...
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
    #[serde(default, deserialize_with = "nullable")]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl OpportunityListing {
    pub fn posted_on(&self) -> Option<NaiveDate> {
        self.posted_at.map(|at| at.date_naive())
    }
}

/// Scoring category, listed in the fixed order explanations are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCategory {
    Skills,
    Domain,
    Goals,
    Experience,
}

impl MatchCategory {
    pub const fn label(self) -> &'static str {
        match self {
            MatchCategory::Skills => "skills",
            MatchCategory::Domain => "domain",
            MatchCategory::Goals => "goals",
            MatchCategory::Experience => "experience",
        }
    }
}

/// One category's contribution, normalized to 0-100 of that category's cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub category: MatchCategory,
    pub score: u8,
    pub description: String,
}

/// Display band used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Moderate,
    Exploratory,
}

impl MatchTier {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            MatchTier::Strong
        } else if score >= 60 {
            MatchTier::Moderate
        } else {
            MatchTier::Exploratory
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchTier::Strong => "strong match",
            MatchTier::Moderate => "good match",
            MatchTier::Exploratory => "exploratory",
        }
    }
}

/// Minimum score at which a session with the mentor may be booked.
pub const BOOKABLE_SCORE: u8 = 20;

/// Compatibility between one student and one mentor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u8,
    pub explanations: Vec<MatchExplanation>,
    pub matching_skills: Vec<String>,
}

impl MatchResult {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.score)
    }

    pub fn is_bookable(&self) -> bool {
        self.score >= BOOKABLE_SCORE
    }
}

/// Mentor paired with its score for ranked listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMentor {
    #[serde(flatten)]
    pub mentor: MentorProfile,
    #[serde(rename = "match")]
    pub result: MatchResult,
    pub tier: MatchTier,
    pub bookable: bool,
}

impl RankedMentor {
    pub fn new(mentor: MentorProfile, result: MatchResult) -> Self {
        Self {
            tier: result.tier(),
            bookable: result.is_bookable(),
            mentor,
            result,
        }
    }
}

/// Narrows a ranked mentor list by domain and a free-text search without reordering it.
///
/// A blank domain or `All` admits every domain. The search term matches the mentor's
/// title or any skill, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MentorFilter {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl MentorFilter {
    pub fn admits(&self, mentor: &MentorProfile) -> bool {
        let domain_ok = match self.domain.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(domain) if domain.eq_ignore_ascii_case("all") => true,
            Some(domain) => mentor.domain.trim().eq_ignore_ascii_case(domain),
        };
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                mentor.title.to_lowercase().contains(&term)
                    || mentor
                        .skills
                        .iter()
                        .any(|skill| skill.to_lowercase().contains(&term))
            }
        };
        domain_ok && search_ok
    }

    pub fn apply(&self, ranked: Vec<RankedMentor>) -> Vec<RankedMentor> {
        ranked
            .into_iter()
            .filter(|entry| self.admits(&entry.mentor))
            .collect()
    }
}

/// Listing annotated with its relevance to a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredOpportunity {
    #[serde(flatten)]
    pub listing: OpportunityListing,
    pub match_score: u8,
    pub match_reasons: Vec<String>,
}
