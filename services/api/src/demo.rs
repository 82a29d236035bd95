use crate::infra::{default_matchmaking_config, InMemoryDirectory};
use chrono::{Local, NaiveDate};
use clap::Args;
use mentor_match::error::AppError;
use mentor_match::matchmaking::fixtures;
use mentor_match::matchmaking::{
    AnalyticsSnapshot, MatchmakingConfig, MatchmakingService, MentorProfile, OpportunityListing,
    OpportunityRecommender, ProfileMatcher, RankedMentor, ScoredOpportunity, SlotId,
    StudentProfile, UserId,
};
use mentor_match::session::{SessionPreferences, ViewRole};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Seeded student to run the student dashboard for.
    #[arg(long, default_value = "student-alex")]
    pub(crate) student: String,
    /// Dashboard to render first: student or alumni.
    #[arg(long, value_parser = crate::infra::parse_view)]
    pub(crate) view: Option<ViewRole>,
    /// Maximum opportunities to list.
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Trailing analytics window in days.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=365))]
    pub(crate) window_days: u32,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// JSON file with `student`, `mentors`, and `opportunities` fields
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Keep only the best N mentors and opportunities
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MatchInput {
    #[serde(default)]
    pub(crate) student: Option<StudentProfile>,
    #[serde(default)]
    pub(crate) mentors: Vec<MentorProfile>,
    #[serde(default)]
    pub(crate) opportunities: Vec<OpportunityListing>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MatchOutput {
    pub(crate) mentors: Vec<RankedMentor>,
    pub(crate) opportunities: Vec<ScoredOpportunity>,
}

pub(crate) fn score_input(input: MatchInput, limit: Option<usize>) -> MatchOutput {
    let config = MatchmakingConfig::default();
    let matcher = ProfileMatcher::new(config.matching);
    let recommender = OpportunityRecommender::new(config.recommendations);
    let student = input.student.unwrap_or_default();

    let mut mentors = matcher.rank_mentors(&student, input.mentors);
    let opportunities = match limit {
        Some(limit) => {
            mentors.truncate(limit);
            recommender.recommend_top(&student, &input.opportunities, limit)
        }
        None => recommender.recommend(&student, &input.opportunities),
    };

    MatchOutput {
        mentors,
        opportunities,
    }
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.input)?;
    let input: MatchInput = serde_json::from_str(&raw)?;
    let output = score_input(input, args.limit);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        student,
        view,
        limit,
        window_days,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let prefs = SessionPreferences::with_view(view.unwrap_or_default());
    let directory = Arc::new(InMemoryDirectory::from_seed(fixtures::seed(today)));
    let service = MatchmakingService::new(directory, default_matchmaking_config(window_days));
    let student = UserId(student);

    println!("Mentor match demo ({today})");
    for view in [prefs.view, prefs.switched().view] {
        match view {
            ViewRole::Student => render_student_view(&service, &student, limit)?,
            ViewRole::Alumni => render_alumni_view(&service.analytics(today)?),
        }
    }
    Ok(())
}

fn render_student_view(
    service: &MatchmakingService<InMemoryDirectory>,
    student: &UserId,
    limit: Option<usize>,
) -> Result<(), AppError> {
    println!("\nStudent dashboard for {student}");

    println!("Ranked mentors");
    for ranked in service.mentor_matches(student)? {
        println!(
            "  - {} ({}, {}): {} [{}]{}",
            ranked.mentor.name,
            ranked.mentor.title,
            ranked.mentor.company,
            ranked.result.score,
            ranked.tier.label(),
            if ranked.bookable { " bookable" } else { "" }
        );
        for explanation in &ranked.result.explanations {
            println!(
                "      {}: {} ({}%)",
                explanation.category.label(),
                explanation.description,
                explanation.score
            );
        }
    }

    let recommendations = service.recommended_opportunities(student, limit)?;
    if recommendations.is_empty() {
        println!("Recommended opportunities: none");
    } else {
        println!("Recommended opportunities");
        for scored in recommendations {
            println!(
                "  - {} at {} [{}]: {} ({})",
                scored.listing.title,
                scored.listing.company,
                scored.listing.kind,
                scored.match_score,
                scored.match_reasons.join("; ")
            );
        }
    }

    match service.book_session(&SlotId("slot-1".to_string()), student) {
        Ok(booking) => println!(
            "Booked {} with {} on {} ({} seat(s) left)",
            booking.slot_id, booking.mentor_id, booking.date, booking.remaining
        ),
        Err(err) => println!("Booking unavailable: {err}"),
    }
    Ok(())
}

fn render_alumni_view(snapshot: &AnalyticsSnapshot) {
    println!("\nAlumni dashboard");
    println!(
        "- {} sessions | {} active mentors | {} opportunities posted | avg match {}",
        snapshot.total_sessions,
        snapshot.active_mentors,
        snapshot.opportunities_posted,
        snapshot.average_match_score
    );

    let busiest = snapshot
        .engagement
        .iter()
        .max_by_key(|day| day.session_count + day.opportunity_count + day.match_count);
    if let Some(day) = busiest {
        println!(
            "- Busiest day {}: {} sessions, {} postings, {} matches",
            day.date, day.session_count, day.opportunity_count, day.match_count
        );
    }

    println!("Top skills");
    for entry in &snapshot.top_skills {
        println!("  - {}: {}", entry.skill, entry.count);
    }

    println!("Recent matches");
    for event in &snapshot.recent_matches {
        println!(
            "  - {} <> {}: {} ({})",
            event.student,
            event.mentor,
            event.score,
            event.timestamp.format("%Y-%m-%d %H:%M")
        );
    }
}
