use chrono::NaiveDate;
use mentor_match::matchmaking::directory::{
    Booking, DirectoryError, DirectoryStore, MatchEvent, MentorshipSlot, SessionRecord,
    SessionStatus,
};
use mentor_match::matchmaking::domain::{
    MentorProfile, OpportunityListing, SlotId, StudentProfile, UserId,
};
use mentor_match::matchmaking::fixtures::SeedData;
use mentor_match::matchmaking::{AnalyticsSettings, MatchmakingConfig};
use mentor_match::session::ViewRole;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct Activity {
    sessions: Vec<SessionRecord>,
    slots: Vec<MentorshipSlot>,
    matches: Vec<MatchEvent>,
}

/// Directory backed by process memory. Bookings and match events live behind one lock so
/// a capacity check and the session it creates are never observed apart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDirectory {
    students: Arc<Vec<StudentProfile>>,
    mentors: Arc<Vec<MentorProfile>>,
    opportunities: Arc<Vec<OpportunityListing>>,
    activity: Arc<Mutex<Activity>>,
}

impl InMemoryDirectory {
    pub(crate) fn from_seed(seed: SeedData) -> Self {
        let SeedData {
            students,
            mentors,
            opportunities,
            sessions,
            slots,
            matches,
        } = seed;
        Self {
            students: Arc::new(students),
            mentors: Arc::new(mentors),
            opportunities: Arc::new(opportunities),
            activity: Arc::new(Mutex::new(Activity {
                sessions,
                slots,
                matches,
            })),
        }
    }

    fn activity(&self) -> Result<MutexGuard<'_, Activity>, DirectoryError> {
        self.activity
            .lock()
            .map_err(|_| DirectoryError::Unavailable("activity store poisoned".to_string()))
    }
}

impl DirectoryStore for InMemoryDirectory {
    fn student(&self, id: &UserId) -> Result<Option<StudentProfile>, DirectoryError> {
        Ok(self
            .students
            .iter()
            .find(|student| &student.user_id == id)
            .cloned())
    }

    fn students(&self) -> Result<Vec<StudentProfile>, DirectoryError> {
        Ok(self.students.to_vec())
    }

    fn mentors(&self) -> Result<Vec<MentorProfile>, DirectoryError> {
        Ok(self.mentors.to_vec())
    }

    fn opportunities(&self) -> Result<Vec<OpportunityListing>, DirectoryError> {
        Ok(self.opportunities.to_vec())
    }

    fn sessions(&self) -> Result<Vec<SessionRecord>, DirectoryError> {
        Ok(self.activity()?.sessions.clone())
    }

    fn match_events(&self) -> Result<Vec<MatchEvent>, DirectoryError> {
        Ok(self.activity()?.matches.clone())
    }

    fn record_match(&self, event: MatchEvent) -> Result<(), DirectoryError> {
        self.activity()?.matches.push(event);
        Ok(())
    }

    fn book_slot(&self, slot: &SlotId, student: &UserId) -> Result<Booking, DirectoryError> {
        let mut guard = self.activity()?;
        let activity = &mut *guard;
        let entry = activity
            .slots
            .iter_mut()
            .find(|candidate| &candidate.id == slot)
            .ok_or(DirectoryError::NotFound)?;
        if entry.remaining() == 0 {
            return Err(DirectoryError::SlotFull);
        }
        entry.booked += 1;
        activity.sessions.push(SessionRecord {
            mentor_id: entry.mentor_id.clone(),
            student_id: student.clone(),
            date: entry.date,
            topic: entry.topic.clone(),
            status: SessionStatus::Upcoming,
        });
        Ok(Booking {
            slot_id: entry.id.clone(),
            mentor_id: entry.mentor_id.clone(),
            student_id: student.clone(),
            date: entry.date,
            remaining: entry.remaining(),
        })
    }
}

pub(crate) fn default_matchmaking_config(window_days: u32) -> MatchmakingConfig {
    MatchmakingConfig {
        analytics: AnalyticsSettings {
            window_days,
            ..AnalyticsSettings::default()
        },
        ..MatchmakingConfig::default()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_view(raw: &str) -> Result<ViewRole, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "student" => Ok(ViewRole::Student),
        "alumni" | "mentor" => Ok(ViewRole::Alumni),
        other => Err(format!("unknown view '{other}' (expected student or alumni)")),
    }
}
