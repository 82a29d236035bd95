use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::config::AnalyticsSettings;
use super::directory::{MatchEvent, SessionRecord};
use super::domain::{MentorProfile, OpportunityListing, StudentProfile, UserId};

/// Records the rollup is computed from, borrowed from the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsInput<'a> {
    pub sessions: &'a [SessionRecord],
    pub opportunities: &'a [OpportunityListing],
    pub matches: &'a [MatchEvent],
    pub students: &'a [StudentProfile],
    pub mentors: &'a [MentorProfile],
}

/// Per-day activity counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEngagement {
    pub date: NaiveDate,
    pub session_count: usize,
    pub opportunity_count: usize,
    pub match_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

/// Dashboard summary of platform activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_sessions: usize,
    pub active_mentors: usize,
    pub opportunities_posted: usize,
    pub average_match_score: u8,
    /// Exactly `window_days` entries, oldest first, ending on the reporting date. A window
    /// reaching past the earliest representable date stops at that date instead.
    pub engagement: Vec<DailyEngagement>,
    pub top_skills: Vec<SkillCount>,
    pub recent_matches: Vec<MatchEvent>,
}

/// Groups activity by day and ranks skills; holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsAggregator {
    settings: AnalyticsSettings,
}

impl AnalyticsAggregator {
    pub fn new(settings: AnalyticsSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalyticsSettings {
        &self.settings
    }

    pub fn generate(&self, input: &AnalyticsInput<'_>, today: NaiveDate) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            total_sessions: input.sessions.len(),
            active_mentors: active_mentors(input),
            opportunities_posted: input.opportunities.len(),
            average_match_score: average_score(input.matches),
            engagement: self.engagement(input, today),
            top_skills: self.top_skills(input),
            recent_matches: self.recent_matches(input.matches),
        }
    }

    fn engagement(&self, input: &AnalyticsInput<'_>, today: NaiveDate) -> Vec<DailyEngagement> {
        let mut days: BTreeMap<NaiveDate, DailyEngagement> = (0..self.settings.window_days)
            .map_while(|offset| today.checked_sub_signed(Duration::days(i64::from(offset))))
            .map(|date| {
                (
                    date,
                    DailyEngagement {
                        date,
                        session_count: 0,
                        opportunity_count: 0,
                        match_count: 0,
                    },
                )
            })
            .collect();

        for session in input.sessions {
            if let Some(day) = days.get_mut(&session.date) {
                day.session_count += 1;
            }
        }
        for listing in input.opportunities {
            if let Some(day) = listing.posted_on().and_then(|date| days.get_mut(&date)) {
                day.opportunity_count += 1;
            }
        }
        for event in input.matches {
            if let Some(day) = days.get_mut(&event.timestamp.date_naive()) {
                day.match_count += 1;
            }
        }

        days.into_values().collect()
    }

    fn top_skills(&self, input: &AnalyticsInput<'_>) -> Vec<SkillCount> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<SkillCount> = Vec::new();

        let skills = input
            .students
            .iter()
            .flat_map(|student| student.skills.iter())
            .chain(input.mentors.iter().flat_map(|mentor| mentor.skills.iter()));
        for skill in skills {
            let label = skill.trim();
            if label.is_empty() {
                continue;
            }
            let key = label.to_lowercase();
            match positions.get(&key).copied() {
                Some(index) => counts[index].count += 1,
                None => {
                    positions.insert(key, counts.len());
                    counts.push(SkillCount {
                        skill: label.to_string(),
                        count: 1,
                    });
                }
            }
        }

        counts.sort_by(|left, right| right.count.cmp(&left.count));
        counts.truncate(self.settings.top_skills);
        counts
    }

    fn recent_matches(&self, matches: &[MatchEvent]) -> Vec<MatchEvent> {
        let mut recent = matches.to_vec();
        recent.sort_by(|left, right| right.timestamp.cmp(&left.timestamp));
        recent.truncate(self.settings.recent_matches);
        recent
    }
}

fn active_mentors(input: &AnalyticsInput<'_>) -> usize {
    let mut mentors: HashSet<&UserId> = input
        .sessions
        .iter()
        .map(|session| &session.mentor_id)
        .collect();
    mentors.extend(
        input
            .opportunities
            .iter()
            .filter_map(|listing| listing.posted_by.as_ref()),
    );
    mentors.len()
}

fn average_score(matches: &[MatchEvent]) -> u8 {
    if matches.is_empty() {
        return 0;
    }
    let total: u32 = matches.iter().map(|event| u32::from(event.score)).sum();
    (f64::from(total) / matches.len() as f64).round() as u8
}

/// Convenience wrapper using the default window and list sizes.
pub fn generate_analytics(input: &AnalyticsInput<'_>, today: NaiveDate) -> AnalyticsSnapshot {
    AnalyticsAggregator::default().generate(input, today)
}
