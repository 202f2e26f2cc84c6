// Criterion benchmarks for HackMatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hackmatch::core::{assemble, decide, select_candidates};
use hackmatch::models::{
    Application, ApplicationStatus, Interaction, InteractionStatus, ReactionAction,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

fn create_application(id: usize) -> Application {
    Application {
        user_id: format!("user-{}", id),
        cwid: None,
        full_name: Some(format!("User {}", id)),
        discord: Some(format!("user{}#0001", id)),
        skill_level: Some("intermediate".to_string()),
        hackathon_experience: Some("2 hackathons".to_string()),
        hear_about_us: None,
        why_attend: None,
        project_experience: Some("web apps".to_string()),
        future_plans: None,
        fun_fact: None,
        self_description: None,
        links: None,
        teammates: None,
        referral_email: None,
        dietary_restrictions_extra: None,
        tshirt_size: None,
        agree_to_terms: true,
        status: ApplicationStatus::Submitted,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

fn create_interaction(from: &str, to: &str, status: InteractionStatus) -> Interaction {
    Interaction {
        id: Uuid::new_v4(),
        initiator_id: from.to_string(),
        target_id: to.to_string(),
        status,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

fn bench_reconciler_decide(c: &mut Criterion) {
    c.bench_function("reconciler_decide", |b| {
        b.iter(|| {
            decide(
                black_box(Some(InteractionStatus::Interested)),
                black_box(ReactionAction::Interested),
                black_box(Some(InteractionStatus::Interested)),
            )
        });
    });
}

fn bench_feed_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_selection");

    for candidate_count in [100, 1000, 5000].iter() {
        let candidates: Vec<Application> =
            (0..*candidate_count).map(create_application).collect();
        let interacted: HashSet<String> = (0..*candidate_count / 4)
            .map(|i| format!("user-{}", i))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("select_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    select_candidates(
                        black_box("user-0"),
                        black_box(&candidates),
                        black_box(&interacted),
                        black_box(10),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_match_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_assembly");

    for record_count in [100, 1000, 5000].iter() {
        let records: Vec<Interaction> = (0..*record_count)
            .map(|i| {
                let other = format!("user-{}", i);
                if i % 2 == 0 {
                    create_interaction("me", &other, InteractionStatus::Matched)
                } else {
                    create_interaction("me", &other, InteractionStatus::Interested)
                }
            })
            .collect();

        let profiles: HashMap<String, Application> = (0..*record_count)
            .map(|i| (format!("user-{}", i), create_application(i)))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("assemble", record_count),
            record_count,
            |b, _| {
                b.iter(|| assemble(black_box("me"), black_box(&records), black_box(&profiles)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_reconciler_decide,
    bench_feed_selection,
    bench_match_assembly
);

criterion_main!(benches);
