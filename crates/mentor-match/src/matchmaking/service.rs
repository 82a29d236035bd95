use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use super::analytics::{AnalyticsAggregator, AnalyticsInput, AnalyticsSnapshot};
use super::config::MatchmakingConfig;
use super::directory::{Booking, DirectoryError, DirectoryStore, MatchEvent};
use super::domain::{RankedMentor, ScoredOpportunity, SlotId, StudentProfile, UserId};
use super::matcher::ProfileMatcher;
use super::recommender::OpportunityRecommender;

/// Service composing the directory collaborator with the scoring engines.
pub struct MatchmakingService<D> {
    directory: Arc<D>,
    matcher: ProfileMatcher,
    recommender: OpportunityRecommender,
    aggregator: AnalyticsAggregator,
}

impl<D> MatchmakingService<D>
where
    D: DirectoryStore + 'static,
{
    pub fn new(directory: Arc<D>, config: MatchmakingConfig) -> Self {
        let MatchmakingConfig {
            matching,
            recommendations,
            analytics,
        } = config;
        Self {
            directory,
            matcher: ProfileMatcher::new(matching),
            recommender: OpportunityRecommender::new(recommendations),
            aggregator: AnalyticsAggregator::new(analytics),
        }
    }

    pub fn matcher(&self) -> &ProfileMatcher {
        &self.matcher
    }

    pub fn recommender(&self) -> &OpportunityRecommender {
        &self.recommender
    }

    fn load_student(&self, student_id: &UserId) -> Result<StudentProfile, ServiceError> {
        self.directory
            .student(student_id)?
            .ok_or_else(|| ServiceError::UnknownStudent(student_id.clone()))
    }

    /// Rank every mentor for the student and record the best match for the activity feed.
    pub fn mentor_matches(&self, student_id: &UserId) -> Result<Vec<RankedMentor>, ServiceError> {
        let student = self.load_student(student_id)?;
        let ranked = self
            .matcher
            .rank_mentors(&student, self.directory.mentors()?);

        if let Some(best) = ranked.first().filter(|best| best.result.score > 0) {
            if let Err(error) = self.record_best_match(&student, best) {
                warn!(student = %student_id, %error, "match event not recorded");
            }
        }

        info!(
            student = %student_id,
            mentors = ranked.len(),
            top_score = ranked.first().map(|best| best.result.score).unwrap_or(0),
            "ranked mentors"
        );
        Ok(ranked)
    }

    /// Appends the pairing to the activity feed unless it repeats the student's latest event.
    fn record_best_match(
        &self,
        student: &StudentProfile,
        best: &RankedMentor,
    ) -> Result<(), DirectoryError> {
        let events = self.directory.match_events()?;
        let repeated = events
            .iter()
            .filter(|event| event.student == student.name)
            .max_by_key(|event| event.timestamp)
            .is_some_and(|latest| {
                latest.mentor == best.mentor.name && latest.score == best.result.score
            });
        if repeated {
            return Ok(());
        }
        self.directory.record_match(MatchEvent {
            student: student.name.clone(),
            mentor: best.mentor.name.clone(),
            score: best.result.score,
            timestamp: Utc::now(),
        })
    }

    pub fn recommended_opportunities(
        &self,
        student_id: &UserId,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredOpportunity>, ServiceError> {
        let student = self.load_student(student_id)?;
        let listings = self.directory.opportunities()?;
        let recommended = match limit {
            Some(limit) => self.recommender.recommend_top(&student, &listings, limit),
            None => self.recommender.recommend(&student, &listings),
        };

        debug!(
            student = %student_id,
            considered = listings.len(),
            recommended = recommended.len(),
            "scored opportunities"
        );
        Ok(recommended)
    }

    pub fn analytics(&self, today: NaiveDate) -> Result<AnalyticsSnapshot, ServiceError> {
        let sessions = self.directory.sessions()?;
        let opportunities = self.directory.opportunities()?;
        let matches = self.directory.match_events()?;
        let students = self.directory.students()?;
        let mentors = self.directory.mentors()?;

        let input = AnalyticsInput {
            sessions: &sessions,
            opportunities: &opportunities,
            matches: &matches,
            students: &students,
            mentors: &mentors,
        };
        Ok(self.aggregator.generate(&input, today))
    }

    pub fn book_session(
        &self,
        slot_id: &SlotId,
        student_id: &UserId,
    ) -> Result<Booking, ServiceError> {
        self.load_student(student_id)?;
        let booking = self.directory.book_slot(slot_id, student_id)?;
        info!(
            slot = %slot_id,
            student = %student_id,
            remaining = booking.remaining,
            "mentorship slot booked"
        );
        Ok(booking)
    }
}

/// Error raised by the matchmaking service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("student profile {0} not found")]
    UnknownStudent(UserId),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
