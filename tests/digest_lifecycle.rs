use chrono::{TimeZone, Utc};
use job_tracker_core::digest::{render_plain_text, DigestConfig, DigestManager, DigestRecord, DigestView};
use job_tracker_core::job::{Job, JobId, MinMatchScore, Preferences, WorkMode};
use job_tracker_core::scoring::RuleScorer;
use job_tracker_core::store::{KeyValueStore, MemoryStore, StoreKey, TrackerStore};
use job_tracker_core::types::DayKey;

fn make_job(id: u64, title: &str, posted_days_ago: u32, source: &str) -> Job {
    Job {
        id: JobId::new(id),
        title: title.to_string(),
        description: String::new(),
        company: format!("Company {id}"),
        location: "Pune".to_string(),
        mode: WorkMode::Onsite,
        experience: "1-3".to_string(),
        skills: vec![],
        salary_range: "6-10 LPA".to_string(),
        posted_days_ago,
        source: source.to_string(),
        apply_url: format!("https://example.com/jobs/{id}"),
    }
}

fn make_prefs(keywords: &str, min: Option<MinMatchScore>) -> Preferences {
    Preferences {
        role_keywords: Some(keywords.to_string()),
        min_match_score: min,
        ..Preferences::default()
    }
}

fn day(s: &str) -> DayKey {
    DayKey::parse(s).unwrap()
}

fn sample_jobs() -> Vec<Job> {
    vec![
        make_job(1, "Rust Engineer", 5, "Indeed"),   // 25
        make_job(2, "Rust Developer", 3, "Indeed"),  // 25
        make_job(3, "Rust Lead", 0, "LinkedIn"),     // 35
        make_job(4, "Go Developer", 0, "Indeed"),    // 5
        make_job(5, "Java Developer", 9, "Indeed"),  // 0
    ]
}

fn ids(record: &DigestRecord) -> Vec<u64> {
    record.jobs.iter().map(|sj| sj.job.id.get()).collect()
}

#[test]
fn digest_orders_by_score_then_recency() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());

    let record = manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("rust", None), &day("2024-01-01"))
        .unwrap();

    assert_eq!(ids(&record), vec![3, 2, 1, 4]);
    let scores: Vec<u8> = record.jobs.iter().map(|sj| sj.score).collect();
    assert_eq!(scores, vec![35, 25, 25, 5]);
    assert!(record.verify());
}

#[test]
fn explicit_threshold_filters_digest() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());

    let prefs = make_prefs("rust", Some(MinMatchScore::Text("30".into())));
    let record = manager
        .generate_digest(&mut store, &sample_jobs(), &prefs, &day("2024-01-01"))
        .unwrap();

    assert_eq!(ids(&record), vec![3]);
}

#[test]
fn unparseable_threshold_falls_back_to_one() {
    let manager = DigestManager::default();
    let prefs = make_prefs("rust", Some(MinMatchScore::Text("lots".into())));

    let ranked = manager.rank(&sample_jobs(), &prefs);
    // Go Developer (5) survives, Java Developer (0) does not
    assert_eq!(ranked.iter().map(|sj| sj.job.id.get()).collect::<Vec<_>>(), vec![3, 2, 1, 4]);
}

#[test]
fn digest_is_truncated_to_limit_keeping_input_order_on_full_ties() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());
    let jobs: Vec<Job> = (1..=15).map(|id| make_job(id, "Rust Engineer", 10, "Indeed")).collect();

    let record = manager
        .generate_digest(&mut store, &jobs, &make_prefs("rust", None), &day("2024-01-01"))
        .unwrap();

    assert_eq!(record.len(), 10);
    assert_eq!(ids(&record), (1..=10).collect::<Vec<u64>>());
}

#[test]
fn custom_limit_is_honoured() {
    let config = DigestConfig {
        limit: 2,
        ..DigestConfig::v0()
    };
    let manager = DigestManager::new(RuleScorer::default(), config);

    let ranked = manager.rank(&sample_jobs(), &make_prefs("rust", None));
    assert_eq!(ranked.len(), 2);
}

#[test]
fn second_generation_returns_first_byte_for_byte() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());
    let today = day("2024-01-01");
    let morning = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 1, 1, 21, 0, 0).unwrap();

    let first = manager
        .generate_digest_at(&mut store, &sample_jobs(), &make_prefs("rust", None), &today, morning)
        .unwrap();

    let mut changed_jobs = sample_jobs();
    changed_jobs.push(make_job(6, "Java Architect", 0, "LinkedIn"));
    let second = manager
        .generate_digest_at(&mut store, &changed_jobs, &make_prefs("java", None), &today, evening)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(serde_json::to_vec(&first).unwrap(), serde_json::to_vec(&second).unwrap());
    assert_eq!(second.generated_at, morning);

    let raw = store.inner().get(&StoreKey::digest(&today)).unwrap().unwrap();
    assert_eq!(raw, serde_json::to_string(&first).unwrap());
}

#[test]
fn zero_matches_is_distinct_from_not_generated() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());
    let today = day("2024-01-01");

    assert_eq!(manager.view(&store, &today).unwrap(), DigestView::NotGenerated);
    assert!(manager.get_cached_digest(&store, &today).unwrap().is_none());

    let prefs = make_prefs("haskell", Some(MinMatchScore::Integer(50)));
    let record = manager.generate_digest(&mut store, &sample_jobs(), &prefs, &today).unwrap();
    assert!(record.is_empty());

    let cached = manager.get_cached_digest(&store, &today).unwrap();
    assert_eq!(cached.as_ref().map(DigestRecord::len), Some(0));

    match manager.view(&store, &today).unwrap() {
        DigestView::NoMatchesToday(r) => assert_eq!(r.day, today),
        other => panic!("expected NoMatchesToday, got {other:?}"),
    }
}

#[test]
fn populated_digest_is_ready() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());
    let today = day("2024-01-01");

    manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("rust", None), &today)
        .unwrap();

    let view = manager.view(&store, &today).unwrap();
    assert!(matches!(view, DigestView::Ready(ref r) if r.len() == 4));
    assert_eq!(view.record().map(DigestRecord::len), Some(4));
}

#[test]
fn reset_allows_regeneration() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());
    let today = day("2024-01-01");

    manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("rust", None), &today)
        .unwrap();
    manager.reset_digest(&mut store, &today).unwrap();
    assert!(manager.get_cached_digest(&store, &today).unwrap().is_none());

    let regenerated = manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("java", None), &today)
        .unwrap();
    assert_eq!(ids(&regenerated), vec![5, 3, 4]);
}

#[test]
fn reset_of_absent_day_is_a_no_op() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());
    let today = day("2024-01-01");

    manager.reset_digest(&mut store, &today).unwrap();
    manager.reset_digest(&mut store, &today).unwrap();
    assert!(manager.get_cached_digest(&store, &today).unwrap().is_none());
}

#[test]
fn days_are_cached_independently() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());

    let monday = manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("rust", None), &day("2024-01-01"))
        .unwrap();
    let tuesday = manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("go", None), &day("2024-01-02"))
        .unwrap();

    assert_ne!(ids(&monday), ids(&tuesday));
    manager.reset_digest(&mut store, &day("2024-01-02")).unwrap();
    assert!(manager.get_cached_digest(&store, &day("2024-01-01")).unwrap().is_some());
}

#[test]
fn corrupt_digest_reads_as_absent_and_can_be_cleared() {
    let today = day("2024-01-01");
    let mut raw = MemoryStore::new();
    raw.set(&StoreKey::digest(&today), "{\"day\":".to_string()).unwrap();

    let manager = DigestManager::default();
    let mut store = TrackerStore::new(raw);
    assert!(manager.get_cached_digest(&store, &today).unwrap().is_none());
    assert_eq!(manager.view(&store, &today).unwrap(), DigestView::NotGenerated);

    store.clear(&StoreKey::digest(&today)).unwrap();
    assert!(store.inner().get(&StoreKey::digest(&today)).unwrap().is_none());

    let record = manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("rust", None), &today)
        .unwrap();
    assert_eq!(record.len(), 4);
}

#[test]
fn tampered_digest_fails_hash_check_and_is_regenerated() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());
    let today = day("2024-01-01");

    let mut record = manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("rust", None), &today)
        .unwrap();
    record.jobs[0].score = 99;
    store.write_json(&StoreKey::digest(&today), &record).unwrap();

    assert!(manager.get_cached_digest(&store, &today).unwrap().is_none());

    let regenerated = manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("rust", None), &today)
        .unwrap();
    assert_eq!(regenerated.jobs[0].score, 35);
}

#[test]
fn digest_stored_under_wrong_day_is_ignored() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());

    let record = manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("rust", None), &day("2024-01-01"))
        .unwrap();
    store.write_json(&StoreKey::digest(&day("2024-01-02")), &record).unwrap();

    assert!(manager.get_cached_digest(&store, &day("2024-01-02")).unwrap().is_none());
}

#[test]
fn plain_text_rendering_lists_ranked_jobs() {
    let manager = DigestManager::default();
    let mut store = TrackerStore::new(MemoryStore::new());
    let today = day("2024-01-01");

    let record = manager
        .generate_digest(&mut store, &sample_jobs(), &make_prefs("rust", None), &today)
        .unwrap();
    let text = render_plain_text(&record);

    assert!(text.starts_with("Top 4 jobs for you (2024-01-01)\n"));
    assert!(text.contains("1. Rust Lead @ Company 3\n"));
    assert!(text.contains("   Pune | Onsite | 1-3 yrs | match 35\n"));
    assert!(text.contains("   Apply: https://example.com/jobs/3\n"));
    assert!(text.find("1. Rust Lead").unwrap() < text.find("2. Rust Developer").unwrap());
}

#[test]
fn plain_text_rendering_of_empty_digest() {
    let record = DigestRecord::new(day("2024-01-01"), vec![], Utc.timestamp_opt(0, 0).unwrap()).unwrap();
    assert_eq!(
        render_plain_text(&record),
        "Daily digest for 2024-01-01\nNo matching roles today. Check again tomorrow.\n"
    );
}
