use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::matchmaking::directory::{
    Booking, DirectoryError, DirectoryStore, MatchEvent, MentorshipSlot, SessionRecord,
    SessionStatus,
};
use crate::matchmaking::domain::{
    MentorProfile, OpportunityId, OpportunityListing, SlotId, StudentProfile, UserId,
};
use crate::matchmaking::{MatchmakingConfig, MatchmakingService};

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 15).expect("valid date")
}

pub(super) fn student(skills: &[&str], interests: &[&str], goals: &[&str]) -> StudentProfile {
    StudentProfile {
        user_id: UserId("student-1".to_string()),
        name: "Alex Kumar".to_string(),
        skills: strings(skills),
        interests: strings(interests),
        goals: strings(goals),
        ..StudentProfile::default()
    }
}

pub(super) fn mentor(
    id: &str,
    skills: &[&str],
    domain: &str,
    expertise: &[&str],
    experience: &str,
) -> MentorProfile {
    MentorProfile {
        user_id: UserId(id.to_string()),
        name: format!("Mentor {id}"),
        skills: strings(skills),
        domain: domain.to_string(),
        expertise: strings(expertise),
        experience: experience.to_string(),
        ..MentorProfile::default()
    }
}

pub(super) fn listing(
    id: &str,
    kind: &str,
    domain: &str,
    requirements: &[&str],
) -> OpportunityListing {
    OpportunityListing {
        id: OpportunityId(id.to_string()),
        title: format!("Listing {id}"),
        kind: kind.to_string(),
        domain: domain.to_string(),
        requirements: strings(requirements),
        ..OpportunityListing::default()
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    pub(super) students: Vec<StudentProfile>,
    pub(super) mentors: Vec<MentorProfile>,
    pub(super) opportunities: Vec<OpportunityListing>,
    pub(super) sessions: Arc<Mutex<Vec<SessionRecord>>>,
    pub(super) slots: Arc<Mutex<Vec<MentorshipSlot>>>,
    pub(super) matches: Arc<Mutex<Vec<MatchEvent>>>,
    pub(super) feed_offline: bool,
}

impl DirectoryStore for MemoryDirectory {
    fn student(&self, id: &UserId) -> Result<Option<StudentProfile>, DirectoryError> {
        Ok(self
            .students
            .iter()
            .find(|student| &student.user_id == id)
            .cloned())
    }

    fn students(&self) -> Result<Vec<StudentProfile>, DirectoryError> {
        Ok(self.students.clone())
    }

    fn mentors(&self) -> Result<Vec<MentorProfile>, DirectoryError> {
        Ok(self.mentors.clone())
    }

    fn opportunities(&self) -> Result<Vec<OpportunityListing>, DirectoryError> {
        Ok(self.opportunities.clone())
    }

    fn sessions(&self) -> Result<Vec<SessionRecord>, DirectoryError> {
        Ok(self.sessions.lock().expect("session mutex poisoned").clone())
    }

    fn match_events(&self) -> Result<Vec<MatchEvent>, DirectoryError> {
        Ok(self.matches.lock().expect("match mutex poisoned").clone())
    }

    fn record_match(&self, event: MatchEvent) -> Result<(), DirectoryError> {
        if self.feed_offline {
            return Err(DirectoryError::Unavailable("activity feed offline".to_string()));
        }
        self.matches
            .lock()
            .expect("match mutex poisoned")
            .push(event);
        Ok(())
    }

    fn book_slot(&self, slot: &SlotId, student: &UserId) -> Result<Booking, DirectoryError> {
        let mut slots = self.slots.lock().expect("slot mutex poisoned");
        let entry = slots
            .iter_mut()
            .find(|candidate| &candidate.id == slot)
            .ok_or(DirectoryError::NotFound)?;
        if entry.remaining() == 0 {
            return Err(DirectoryError::SlotFull);
        }
        entry.booked += 1;
        self.sessions
            .lock()
            .expect("session mutex poisoned")
            .push(SessionRecord {
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

pub(super) struct UnavailableDirectory;

impl DirectoryStore for UnavailableDirectory {
    fn student(&self, _id: &UserId) -> Result<Option<StudentProfile>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn students(&self) -> Result<Vec<StudentProfile>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn mentors(&self) -> Result<Vec<MentorProfile>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn opportunities(&self) -> Result<Vec<OpportunityListing>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn sessions(&self) -> Result<Vec<SessionRecord>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn match_events(&self) -> Result<Vec<MatchEvent>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn record_match(&self, _event: MatchEvent) -> Result<(), DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn book_slot(&self, _slot: &SlotId, _student: &UserId) -> Result<Booking, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn directory() -> MemoryDirectory {
    MemoryDirectory {
        students: vec![student(
            &["React", "Python"],
            &["Web Development"],
            &["Get internship experience"],
        )],
        mentors: vec![
            mentor("mentor-data", &["Python", "SQL"], "Data Science", &[], "3 years"),
            mentor(
                "mentor-web",
                &["React", "Node.js"],
                "Web Development",
                &[],
                "6 years",
            ),
            mentor("mentor-pm", &["Roadmaps"], "Product Management", &[], "8 years"),
        ],
        opportunities: vec![
            listing("opp-research", "Research", "Data Science", &["Python"]),
            listing("opp-intern", "Internship", "Web Development", &["React"]),
            listing("opp-pm", "Fellowship", "Product Management", &["Roadmapping"]),
        ],
        slots: Arc::new(Mutex::new(vec![MentorshipSlot {
            id: SlotId("slot-1".to_string()),
            mentor_id: UserId("mentor-web".to_string()),
            date: report_date(),
            topic: "React Best Practices".to_string(),
            capacity: 1,
            booked: 0,
        }])),
        ..MemoryDirectory::default()
    }
}

pub(super) fn build_service() -> (MatchmakingService<MemoryDirectory>, Arc<MemoryDirectory>) {
    let directory = Arc::new(directory());
    let service = MatchmakingService::new(directory.clone(), MatchmakingConfig::default());
    (service, directory)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
