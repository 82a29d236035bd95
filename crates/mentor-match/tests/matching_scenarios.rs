use chrono::NaiveDate;
use mentor_match::matchmaking::fixtures;
use mentor_match::matchmaking::{
    generate_analytics, match_score, recommend_opportunities, AnalyticsInput, MatchCategory,
    MatchTier, MentorProfile, OpportunityListing, ProfileMatcher, StudentProfile,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 15).expect("valid report date")
}

#[test]
fn web_developer_matches_web_mentor_at_fifty() {
    let student = StudentProfile {
        skills: strings(&["React", "Python"]),
        interests: strings(&["Web Development"]),
        ..StudentProfile::default()
    };
    let mentor = MentorProfile {
        skills: strings(&["React", "Node.js"]),
        domain: "Web Development".to_string(),
        experience: "6 years".to_string(),
        ..MentorProfile::default()
    };

    let result = match_score(&student, &mentor);

    assert_eq!(result.score, 50);
    assert_eq!(result.matching_skills, strings(&["React"]));
    let categories: Vec<MatchCategory> = result
        .explanations
        .iter()
        .map(|explanation| explanation.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            MatchCategory::Skills,
            MatchCategory::Domain,
            MatchCategory::Experience
        ]
    );
    assert_eq!(result.tier(), MatchTier::Exploratory);
    assert!(result.is_bookable());
}

#[test]
fn profiles_arriving_as_json_with_nulls_score_like_empty_lists() {
    let student: StudentProfile = serde_json::from_str(
        r#"{"userId":"s-1","skills":null,"interests":["Data Science"],"goals":null}"#,
    )
    .expect("student parses");
    let mentor: MentorProfile = serde_json::from_str(
        r#"{"userId":"m-1","skills":["SQL"],"expertise":null,"domain":"Data Science","experience":null}"#,
    )
    .expect("mentor parses");

    let result = ProfileMatcher::default().score(Some(&student), Some(&mentor));

    assert_eq!(result.score, 30);
    assert_eq!(result.explanations.len(), 1);
    assert_eq!(result.explanations[0].description, "Domain expertise in Data Science");
}

#[test]
fn internship_listing_scores_seventy_through_public_api() {
    let student = StudentProfile {
        skills: strings(&["React"]),
        interests: strings(&["Software Engineering"]),
        goals: strings(&["Get internship experience"]),
        ..StudentProfile::default()
    };
    let listing: OpportunityListing = serde_json::from_str(
        r#"{"id":"opp-1","type":"Internship","domain":"Software Engineering","requirements":["React"]}"#,
    )
    .expect("listing parses");

    let scored = recommend_opportunities(&student, &[listing]);

    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].match_score, 70);
    let payload = serde_json::to_value(&scored[0]).expect("serializes");
    assert_eq!(payload["type"], "Internship");
    assert_eq!(payload["matchScore"], 70);
    assert_eq!(payload["matchReasons"].as_array().map(Vec::len), Some(3));
}

#[test]
fn seeded_directory_ranks_and_recommends_consistently() {
    let seed = fixtures::seed(report_date());
    let alex = &seed.students[0];
    let matcher = ProfileMatcher::default();

    let ranked = matcher.rank_mentors(alex, seed.mentors.clone());
    assert_eq!(ranked[0].mentor.name, "Sarah Chen");
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].result.score >= pair[1].result.score));
    assert!(ranked.iter().all(|entry| entry.result.score <= 100));

    let again = matcher.rank_mentors(alex, seed.mentors.clone());
    assert_eq!(ranked, again);

    let recommended = recommend_opportunities(alex, &seed.opportunities);
    assert_eq!(recommended[0].listing.title, "Software Engineering Intern");
    assert!(recommended.iter().all(|scored| scored.match_score > 0));
}

#[test]
fn seeded_analytics_snapshot_is_fully_populated() {
    let seed = fixtures::seed(report_date());
    let input = AnalyticsInput {
        sessions: &seed.sessions,
        opportunities: &seed.opportunities,
        matches: &seed.matches,
        students: &seed.students,
        mentors: &seed.mentors,
    };

    let snapshot = generate_analytics(&input, report_date());

    assert_eq!(snapshot.total_sessions, seed.sessions.len());
    assert_eq!(snapshot.active_mentors, 3);
    assert_eq!(snapshot.opportunities_posted, 3);
    assert_eq!(snapshot.engagement.len(), 30);
    assert_eq!(
        snapshot.engagement.last().map(|day| day.date),
        Some(report_date())
    );
    assert_eq!(snapshot.top_skills.len(), 5);
    assert_eq!(snapshot.recent_matches.len(), 3);
    assert!(snapshot
        .recent_matches
        .windows(2)
        .all(|pair| pair[0].timestamp >= pair[1].timestamp));
    assert!((60..=94).contains(&snapshot.average_match_score));
}
