use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{MentorProfile, OpportunityListing, SlotId, StudentProfile, UserId};

/// Lifecycle of a booked mentorship session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// Mentorship session as stored by the booking collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub mentor_id: UserId,
    pub student_id: UserId,
    pub date: NaiveDate,
    pub topic: String,
    pub status: SessionStatus,
}

/// A match surfaced to a student, kept for the "recent matches" feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub student: String,
    pub mentor: String,
    pub score: u8,
    pub timestamp: DateTime<Utc>,
}

/// Bookable window published by an alumni mentor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipSlot {
    pub id: SlotId,
    pub mentor_id: UserId,
    pub date: NaiveDate,
    pub topic: String,
    pub capacity: u32,
    pub booked: u32,
}

impl MentorshipSlot {
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.booked)
    }
}

/// Confirmation returned after a slot is claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub slot_id: SlotId,
    pub mentor_id: UserId,
    pub student_id: UserId,
    pub date: NaiveDate,
    pub remaining: u32,
}

/// Profile, opportunity, and booking storage used by the matchmaking service.
///
/// `book_slot` must check capacity and record the booking atomically: once
/// `booked == capacity` every further call returns [`DirectoryError::SlotFull`].
pub trait DirectoryStore: Send + Sync {
    fn student(&self, id: &UserId) -> Result<Option<StudentProfile>, DirectoryError>;
    fn students(&self) -> Result<Vec<StudentProfile>, DirectoryError>;
    fn mentors(&self) -> Result<Vec<MentorProfile>, DirectoryError>;
    /// Listings newest first.
    fn opportunities(&self) -> Result<Vec<OpportunityListing>, DirectoryError>;
    fn sessions(&self) -> Result<Vec<SessionRecord>, DirectoryError>;
    fn match_events(&self) -> Result<Vec<MatchEvent>, DirectoryError>;
    fn record_match(&self, event: MatchEvent) -> Result<(), DirectoryError>;
    fn book_slot(&self, slot: &SlotId, student: &UserId) -> Result<Booking, DirectoryError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("record not found")]
    NotFound,
    #[error("mentorship slot is fully booked")]
    SlotFull,
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
