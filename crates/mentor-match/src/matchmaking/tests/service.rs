use std::sync::Arc;

use super::common::*;
use crate::matchmaking::directory::DirectoryError;
use crate::matchmaking::domain::{SlotId, UserId};
use crate::matchmaking::{MatchmakingConfig, MatchmakingService, ServiceError};

fn student_id() -> UserId {
    UserId("student-1".to_string())
}

#[test]
fn mentor_matches_rank_and_record_best_match() {
    let (service, directory) = build_service();

    let ranked = service
        .mentor_matches(&student_id())
        .expect("mentors ranked");

    assert_eq!(ranked[0].mentor.user_id.0, "mentor-web");
    assert_eq!(ranked[0].result.score, 50);
    assert_eq!(ranked.len(), 3);
    let events = directory.matches.lock().expect("match mutex poisoned");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].mentor, "Mentor mentor-web");
    assert_eq!(events[0].score, 50);
}

#[test]
fn repeated_rankings_record_one_event() {
    let (service, directory) = build_service();

    for _ in 0..5 {
        service
            .mentor_matches(&student_id())
            .expect("mentors ranked");
    }

    assert_eq!(directory.matches.lock().expect("match mutex poisoned").len(), 1);
}

#[test]
fn changed_best_match_is_recorded_again() {
    let (service, directory) = build_service();
    service
        .mentor_matches(&student_id())
        .expect("mentors ranked");

    directory
        .matches
        .lock()
        .expect("match mutex poisoned")
        .iter_mut()
        .for_each(|event| event.score = 10);
    service
        .mentor_matches(&student_id())
        .expect("mentors ranked");

    let events = directory.matches.lock().expect("match mutex poisoned");
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].score, 50);
}

#[test]
fn feed_failure_does_not_fail_ranking() {
    let directory = Arc::new(MemoryDirectory {
        feed_offline: true,
        ..directory()
    });
    let service = MatchmakingService::new(directory.clone(), MatchmakingConfig::default());

    let ranked = service
        .mentor_matches(&student_id())
        .expect("ranking survives feed outage");

    assert_eq!(ranked[0].result.score, 50);
    assert!(directory.matches.lock().expect("match mutex poisoned").is_empty());
}

#[test]
fn unknown_student_is_reported() {
    let (service, _) = build_service();

    match service.mentor_matches(&UserId("ghost".to_string())) {
        Err(ServiceError::UnknownStudent(id)) => assert_eq!(id.0, "ghost"),
        other => panic!("expected unknown student, got {other:?}"),
    }
}

#[test]
fn recommendations_respect_limit() {
    let (service, _) = build_service();

    let all = service
        .recommended_opportunities(&student_id(), None)
        .expect("recommendations");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].listing.id.0, "opp-intern");
    assert_eq!(all[0].match_score, 70);

    let limited = service
        .recommended_opportunities(&student_id(), Some(1))
        .expect("recommendations");
    assert_eq!(limited.len(), 1);
}

#[test]
fn slot_capacity_is_never_exceeded() {
    let (service, directory) = build_service();
    let slot = SlotId("slot-1".to_string());

    let booking = service
        .book_session(&slot, &student_id())
        .expect("first booking succeeds");
    assert_eq!(booking.remaining, 0);

    match service.book_session(&slot, &student_id()) {
        Err(ServiceError::Directory(DirectoryError::SlotFull)) => {}
        other => panic!("expected full slot, got {other:?}"),
    }
    assert_eq!(directory.sessions.lock().expect("session mutex").len(), 1);
}

#[test]
fn concurrent_bookings_claim_each_seat_once() {
    let directory = directory();
    directory
        .slots
        .lock()
        .expect("slot mutex poisoned")
        .iter_mut()
        .for_each(|slot| slot.capacity = 3);
    let directory = Arc::new(directory);
    let service = Arc::new(MatchmakingService::new(
        directory.clone(),
        MatchmakingConfig::default(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            std::thread::spawn(move || {
                service
                    .book_session(&SlotId("slot-1".to_string()), &student_id())
                    .is_ok()
            })
        })
        .collect();
    let successes = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread completes"))
        .filter(|booked| *booked)
        .count();

    assert_eq!(successes, 3);
    assert_eq!(directory.sessions.lock().expect("session mutex").len(), 3);
}

#[test]
fn analytics_reflect_recorded_matches_and_bookings() {
    let (service, _) = build_service();
    service
        .mentor_matches(&student_id())
        .expect("mentors ranked");
    service
        .book_session(&SlotId("slot-1".to_string()), &student_id())
        .expect("booked");

    let snapshot = service.analytics(report_date()).expect("snapshot");

    assert_eq!(snapshot.total_sessions, 1);
    assert_eq!(snapshot.active_mentors, 1);
    assert_eq!(snapshot.opportunities_posted, 3);
    assert_eq!(snapshot.average_match_score, 50);
    assert_eq!(snapshot.engagement.len(), 30);
    assert_eq!(snapshot.engagement[29].session_count, 1);
}

#[test]
fn directory_outage_propagates() {
    let service = MatchmakingService::new(
        Arc::new(UnavailableDirectory),
        MatchmakingConfig::default(),
    );

    match service.analytics(report_date()) {
        Err(ServiceError::Directory(DirectoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline")
        }
        other => panic!("expected outage, got {other:?}"),
    }
}
