use criterion::{criterion_group, criterion_main, Criterion};
use hitscore::config::{Configuration, DisplayMode};
use hitscore::judgment::{
    ChainHeadScores, CutScores, Judgment, JudgmentSegment, JudgmentService, JudgmentTable,
    ScoringEvent, TimeDependenceJudgmentSegment,
};
use std::hint::black_box;
use std::sync::Arc;

fn setup_service() -> JudgmentService {
    let table = JudgmentTable::new(vec![
        Judgment::new(115, "%BFantastic%A%n%s", [1.0, 1.0, 1.0, 1.0], false),
        Judgment::new(101, "<size=80%>%BExcellent%A</size>%n%s", [0.0, 1.0, 0.0, 1.0], true),
        Judgment::new(90, "<size=80%>%BGreat%A</size>%n%s", [1.0, 0.98, 0.0, 1.0], true),
        Judgment::new(80, "<size=80%>%BGood%A</size>%n%s", [1.0, 0.6, 0.0, 1.0], true),
        Judgment::new(60, "<size=80%>%BDecent%A</size>%n%s", [1.0, 0.0, 0.0, 1.0], true),
        Judgment::new(0, "<size=80%>%BWay Off%A</size>%n%s", [0.5, 0.0, 0.0, 1.0], true),
    ])
    .expect("valid table");

    let mut config = Configuration::new(table);
    config.display_mode = DisplayMode::Format;
    config.before_cut_angle_judgments = Some(vec![
        JudgmentSegment::new(70, "+"),
        JudgmentSegment::new(0, " "),
    ]);
    config.after_cut_angle_judgments = Some(vec![
        JudgmentSegment::new(30, "+"),
        JudgmentSegment::new(0, " "),
    ]);
    config.time_dependence_judgments = Some(vec![
        TimeDependenceJudgmentSegment::new(0.1, "%t late"),
        TimeDependenceJudgmentSegment::new(0.0, "on time"),
    ]);
    config.time_dependence_decimal_offset = 2;
    config.time_dependence_decimal_precision = 1;

    JudgmentService::new(Arc::new(config))
}

fn random_events(n: usize) -> Vec<ScoringEvent> {
    let mut rng = fastrand::Rng::with_seed(7);
    (0..n)
        .map(|_| {
            if rng.u8(..10) == 0 {
                ScoringEvent::BurstSliderHead(ChainHeadScores {
                    before: rng.i32(0..=70),
                    accuracy: rng.i32(0..=15),
                    cut_normal_z: rng.f32() - 0.5,
                    max_cut_score: 85,
                })
            } else {
                ScoringEvent::Normal(CutScores {
                    before: rng.i32(0..=70),
                    after: rng.i32(0..=30),
                    accuracy: rng.i32(0..=15),
                    cut_normal_z: rng.f32() - 0.5,
                    max_cut_score: 115,
                    assumed_after: None,
                })
            }
        })
        .collect()
}

fn bench_judge(c: &mut Criterion) {
    let service = setup_service();
    let events = random_events(1024);

    c.bench_function("judge_format_single", |b| {
        let event = events[0];
        b.iter(|| service.judge(black_box(&event)))
    });

    c.bench_function("judge_format_1024", |b| {
        b.iter(|| {
            for event in &events {
                let _ = black_box(service.judge(event));
            }
        })
    });

    c.bench_function("judge_all_1024", |b| {
        b.iter(|| black_box(service.judge_all(&events)))
    });
}

criterion_group!(benches, bench_judge);
criterion_main!(benches);
