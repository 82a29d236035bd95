//! Illustrative seed directory used by the CLI demo and the in-memory store.
//!
//! Activity is laid out relative to the reporting date so every analytics window has data.
//! The pattern is deterministic: the same `today` always produces the same records.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::directory::{MatchEvent, MentorshipSlot, SessionRecord, SessionStatus};
use super::domain::{
    MentorProfile, OpportunityId, OpportunityListing, SlotId, StudentProfile, UserId,
};

#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub students: Vec<StudentProfile>,
    pub mentors: Vec<MentorProfile>,
    /// Newest first.
    pub opportunities: Vec<OpportunityListing>,
    pub sessions: Vec<SessionRecord>,
    pub slots: Vec<MentorshipSlot>,
    pub matches: Vec<MatchEvent>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn at(date: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    date.and_hms_opt(hour, 0, 0).map(|naive| naive.and_utc())
}

pub fn students() -> Vec<StudentProfile> {
    vec![
        StudentProfile {
            user_id: UserId("student-alex".to_string()),
            name: "Alex Kumar".to_string(),
            skills: strings(&["JavaScript", "Python", "React", "Node.js"]),
            interests: strings(&["Web Development", "Machine Learning", "Mobile Development"]),
            goals: strings(&[
                "Land a software engineering internship",
                "Learn system design",
                "Build a strong professional network",
            ]),
            year: Some("Junior".to_string()),
            major: Some("Computer Science".to_string()),
            university: Some("Tech University".to_string()),
            gpa: Some("3.8".to_string()),
        },
        StudentProfile {
            user_id: UserId("student-jessica".to_string()),
            name: "Jessica Wong".to_string(),
            skills: strings(&["Product Strategy", "SQL", "Analytics"]),
            interests: strings(&["Product Management"]),
            goals: strings(&["Transition to product management"]),
            year: Some("Senior".to_string()),
            major: Some("Business Analytics".to_string()),
            ..StudentProfile::default()
        },
    ]
}

pub fn mentors() -> Vec<MentorProfile> {
    vec![
        MentorProfile {
            user_id: UserId("mentor-sarah".to_string()),
            name: "Sarah Chen".to_string(),
            title: "Senior Software Engineer".to_string(),
            company: "Google".to_string(),
            skills: strings(&["React", "Node.js", "System Design"]),
            expertise: strings(&["Web Development", "System Architecture", "Team Leadership"]),
            domain: "Software Engineering".to_string(),
            experience: "5 years".to_string(),
        },
        MentorProfile {
            user_id: UserId("mentor-michael".to_string()),
            name: "Michael Rodriguez".to_string(),
            title: "Product Manager".to_string(),
            company: "Microsoft".to_string(),
            skills: strings(&["Product Strategy", "User Research", "Analytics"]),
            expertise: strings(&["Product Management", "Strategy", "User Experience"]),
            domain: "Product Management".to_string(),
            experience: "7 years".to_string(),
        },
        MentorProfile {
            user_id: UserId("mentor-emily".to_string()),
            name: "Emily Johnson".to_string(),
            title: "Data Scientist".to_string(),
            company: "Netflix".to_string(),
            skills: strings(&["Python", "Machine Learning", "SQL"]),
            expertise: strings(&["Data Science", "Machine Learning", "Analytics"]),
            domain: "Data Science".to_string(),
            experience: "4 years".to_string(),
        },
    ]
}

pub fn opportunities(today: NaiveDate) -> Vec<OpportunityListing> {
    let posted = |days: i64| at(today - Duration::days(days), 9);
    vec![
        OpportunityListing {
            id: OpportunityId("opp-swe-intern".to_string()),
            title: "Software Engineering Intern".to_string(),
            company: "TechCorp".to_string(),
            description: "Work on web applications using React and Node.js.".to_string(),
            domain: "Software Engineering".to_string(),
            kind: "Internship".to_string(),
            requirements: strings(&["React", "JavaScript", "Git"]),
            posted_by: Some(UserId("mentor-sarah".to_string())),
            posted_at: posted(2),
        },
        OpportunityListing {
            id: OpportunityId("opp-pm-fellowship".to_string()),
            title: "Product Management Fellowship".to_string(),
            company: "StartupXYZ".to_string(),
            description: "Six month fellowship covering product fundamentals.".to_string(),
            domain: "Product Management".to_string(),
            kind: "Fellowship".to_string(),
            requirements: strings(&["Business Analysis", "Communication", "Problem Solving"]),
            posted_by: Some(UserId("mentor-michael".to_string())),
            posted_at: posted(5),
        },
        OpportunityListing {
            id: OpportunityId("opp-ds-research".to_string()),
            title: "Data Science Research Assistant".to_string(),
            company: "University Lab".to_string(),
            description: "Machine learning applications in healthcare.".to_string(),
            domain: "Data Science".to_string(),
            kind: "Research".to_string(),
            requirements: strings(&["Python", "Statistics", "Research Experience"]),
            posted_by: Some(UserId("mentor-emily".to_string())),
            posted_at: posted(9),
        },
    ]
}

pub fn seed(today: NaiveDate) -> SeedData {
    let students = students();
    let mentors = mentors();
    let topics = ["React Best Practices", "Product Strategy", "Intro to ML"];

    let mut sessions = Vec::new();
    let mut matches = Vec::new();
    for offset in 0..30u32 {
        let date = today - Duration::days(i64::from(offset));
        let per_day = 1 + (offset * 7) % 4;
        for slot in 0..per_day {
            let index = ((offset + slot) as usize) % mentors.len();
            let student = &students[(offset + slot) as usize % students.len()];
            sessions.push(SessionRecord {
                mentor_id: mentors[index].user_id.clone(),
                student_id: student.user_id.clone(),
                date,
                topic: topics[index].to_string(),
                status: if offset == 0 {
                    SessionStatus::Upcoming
                } else {
                    SessionStatus::Completed
                },
            });
        }
        if offset % 3 == 0 {
            if let Some(timestamp) = at(date, 8 + offset % 10) {
                matches.push(MatchEvent {
                    student: students[offset as usize % students.len()].name.clone(),
                    mentor: mentors[offset as usize % mentors.len()].name.clone(),
                    score: 60 + ((offset * 13) % 35) as u8,
                    timestamp,
                });
            }
        }
    }

    let slots = mentors
        .iter()
        .enumerate()
        .map(|(index, mentor)| MentorshipSlot {
            id: SlotId(format!("slot-{}", index + 1)),
            mentor_id: mentor.user_id.clone(),
            date: today + Duration::days(index as i64 + 1),
            topic: topics[index].to_string(),
            capacity: 2,
            booked: 0,
        })
        .collect();

    SeedData {
        opportunities: opportunities(today),
        students,
        mentors,
        sessions,
        slots,
        matches,
    }
}
