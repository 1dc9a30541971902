use friendship_quiz::QuizApp;
use friendship_quiz::analysis::{AnalysisError, FALLBACK_ANALYSIS, TextGenerator};
use friendship_quiz::app::OptionStyle;
use friendship_quiz::data::read_questions_embedded;
use friendship_quiz::model::{AppStep, SavedRecord};
use friendship_quiz::rank::RankTier;
use friendship_quiz::records::{MemoryBlobStore, RecordStore, STORAGE_KEY};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

struct Reply(&'static str);

impl TextGenerator for Reply {
    fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
        Ok(self.0.to_string())
    }
}

struct Broken;

impl TextGenerator for Broken {
    fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
        Err(AnalysisError::Http {
            status: 503,
            body: "overloaded".into(),
        })
    }
}

/// Cada llamada espera una señal y responde con la línea de puntuación del prompt.
struct Gated {
    release: Mutex<Receiver<()>>,
}

impl TextGenerator for Gated {
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        let release = self.release.lock().unwrap();
        release.recv().unwrap();
        let line = prompt.lines().find(|l| l.contains("scored")).unwrap_or_default();
        Ok(line.trim().to_string())
    }
}

fn gated() -> (Arc<Gated>, Sender<()>) {
    let (tx, rx) = channel();
    let generator = Arc::new(Gated {
        release: Mutex::new(rx),
    });
    (generator, tx)
}

fn app_with(generator: Arc<dyn TextGenerator>) -> (QuizApp, MemoryBlobStore) {
    let backend = MemoryBlobStore::new();
    let app = QuizApp::with_parts(
        read_questions_embedded(),
        RecordStore::open(backend.clone()),
        generator,
    );
    (app, backend)
}

/// Responde todo el banco acertando las `correct` primeras.
fn play_through(app: &mut QuizApp, correct: usize) {
    app.start();
    for i in 0..app.total_questions() {
        let q = app.current_question().unwrap();
        let idx = if i < correct {
            q.correct
        } else {
            (q.correct + 1) % q.options.len()
        };
        app.select_option(idx);
        app.advance();
    }
}

fn wait_for_analysis(app: &mut QuizApp) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.is_analyzing && Instant::now() < deadline {
        app.poll_analysis();
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn fifteen_correct_answers_score_seventy_five_and_rank_high() {
    let (mut app, backend) = app_with(Arc::new(Reply("ok")));
    play_through(&mut app, 15);

    assert_eq!(app.step(), AppStep::Result);
    let view = app.result_view();
    assert_eq!(view.score, 15);
    assert_eq!(view.total, 20);
    assert_eq!(format!("{} / 100", view.points), "75 / 100");
    assert_eq!(view.rank.tier, RankTier::High);

    let records = app.records.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].score, 15);
    assert_eq!(records[0].total_questions, 20);
    assert_eq!(records[0].rank_title, view.rank.title);

    let persisted: Vec<SavedRecord> =
        serde_json::from_str(&backend.raw(STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(persisted, records);
}

#[test]
fn each_completed_run_adds_exactly_one_record_newest_first() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));
    play_through(&mut app, 5);
    app.reset();
    play_through(&mut app, 18);

    let scores: Vec<_> = app.records.records().iter().map(|r| r.score).collect();
    assert_eq!(scores, [18, 5]);
}

#[test]
fn selecting_twice_does_not_double_score() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));
    app.start();
    let correct = app.current_question().unwrap().correct;

    app.select_option(correct);
    let after_first = app.state.clone();
    app.select_option(correct);
    app.select_option((correct + 1) % 4);

    assert_eq!(app.state, after_first);
    assert_eq!(app.state.score, 1);
    assert_eq!(app.state.user_answers.len(), 1);
}

#[test]
fn score_equals_correct_log_entries() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));
    app.start();
    for k in 1..=8 {
        let q = app.current_question().unwrap();
        let pick = if k % 3 == 0 { q.correct } else { (q.correct + 1) % q.options.len() };
        app.select_option(pick);
        let correct_entries = app.state.user_answers.iter().filter(|a| a.is_correct).count();
        assert!(app.state.score <= k);
        assert_eq!(app.state.score, correct_entries);
        app.advance();
    }
    assert_eq!(app.state.score, 2);
}

#[test]
fn advancing_clears_selection_and_explanation() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));
    app.start();

    // Sin responder, advance no hace nada
    app.advance();
    assert_eq!(app.state.current_index, 0);

    app.select_option(0);
    assert!(app.state.show_explanation);
    assert!((app.progress_fraction() - 1.0 / 20.0).abs() < f32::EPSILON);

    app.advance();
    assert_eq!(app.state.current_index, 1);
    assert_eq!(app.state.selected_option, None);
    assert!(!app.state.show_explanation);
    assert_eq!(app.option_style(0), OptionStyle::Neutral);
}

#[test]
fn option_styles_reflect_the_answer() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));
    app.start();
    let correct = app.current_question().unwrap().correct;
    let wrong = (correct + 1) % 4;
    let other = (correct + 2) % 4;

    app.select_option(wrong);

    assert_eq!(app.option_style(correct), OptionStyle::Correct);
    assert_eq!(app.option_style(wrong), OptionStyle::Wrong);
    assert_eq!(app.option_style(other), OptionStyle::Dimmed);
    assert_eq!(app.answered_correctly(), Some(false));
}

#[test]
fn out_of_range_option_is_ignored() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));
    app.start();
    app.select_option(99);
    assert!(!app.state.show_explanation);
    assert!(app.state.user_answers.is_empty());
}

#[test]
fn transitions_outside_their_step_are_ignored() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));

    app.select_option(0);
    app.request_analysis();
    app.attempt_admin_login("2025");
    assert_eq!(app.step(), AppStep::Intro);

    app.start();
    app.start();
    app.open_admin_login();
    assert_eq!(app.step(), AppStep::Quiz);
}

#[test]
fn analysis_success_is_stored_and_flag_cleared() {
    let (mut app, _backend) = app_with(Arc::new(Reply("你們的友誼滿分")));
    play_through(&mut app, 12);

    app.request_analysis();
    assert_eq!(app.step(), AppStep::Analysis);
    assert!(app.is_analyzing);

    wait_for_analysis(&mut app);
    assert!(!app.is_analyzing);
    assert_eq!(app.ai_analysis.as_deref(), Some("你們的友誼滿分"));
}

#[test]
fn failing_analysis_falls_back_and_still_reaches_the_analysis_step() {
    let (mut app, _backend) = app_with(Arc::new(Broken));
    play_through(&mut app, 15);

    app.request_analysis();
    wait_for_analysis(&mut app);

    assert_eq!(app.step(), AppStep::Analysis);
    assert!(!app.is_analyzing);
    assert_eq!(app.ai_analysis.as_deref(), Some(FALLBACK_ANALYSIS));
}

#[test]
fn stale_analysis_after_reset_is_discarded() {
    let (generator, release) = gated();
    let (mut app, _backend) = app_with(generator);

    play_through(&mut app, 15);
    app.request_analysis();
    let first_generation = app.generation();

    app.reset();
    assert_ne!(app.generation(), first_generation);
    assert_eq!(app.ai_analysis, None);

    play_through(&mut app, 10);
    app.request_analysis();

    // La primera petición sale antes; su resultado no debe colarse
    release.send(()).unwrap();
    release.send(()).unwrap();
    wait_for_analysis(&mut app);

    let text = app.ai_analysis.clone().unwrap();
    assert!(text.contains("scored 10 out of 20"), "{text}");

    std::thread::sleep(Duration::from_millis(20));
    app.poll_analysis();
    assert_eq!(app.ai_analysis.as_deref(), Some(text.as_str()));
}

#[test]
fn late_result_does_not_resurrect_text_into_a_fresh_session() {
    let (generator, release) = gated();
    let (mut app, _backend) = app_with(generator);

    play_through(&mut app, 15);
    app.request_analysis();
    app.reset();

    release.send(()).unwrap();
    let deadline = Instant::now() + Duration::from_millis(200);
    while Instant::now() < deadline {
        app.poll_analysis();
        std::thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(app.step(), AppStep::Intro);
    assert_eq!(app.ai_analysis, None);
    assert!(!app.is_analyzing);
}

#[test]
fn admin_login_checks_the_shared_secret() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));
    app.open_admin_login();
    assert_eq!(app.step(), AppStep::AdminLogin);

    app.set_admin_input("1234".into());
    app.submit_admin_login();
    assert_eq!(app.step(), AppStep::AdminLogin);
    assert!(app.login_error);

    // Escribir de nuevo limpia el aviso
    app.set_admin_input("202".into());
    assert!(!app.login_error);

    app.set_admin_input("2025".into());
    app.submit_admin_login();
    assert_eq!(app.step(), AppStep::AdminDashboard);
    assert!(!app.login_error);
}

#[test]
fn reset_from_login_clears_input_and_error() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));
    app.open_admin_login();
    app.attempt_admin_login("nope");
    app.admin_pass_input = "nope".into();

    app.reset();

    assert_eq!(app.step(), AppStep::Intro);
    assert!(app.admin_pass_input.is_empty());
    assert!(!app.login_error);
}

#[test]
fn dashboard_deletes_records_and_ignores_unknown_ids() {
    let (mut app, backend) = app_with(Arc::new(Reply("ok")));
    play_through(&mut app, 20);
    app.reset();
    play_through(&mut app, 10);
    app.reset();

    // Fuera del panel no se borra nada
    let first_id = app.records.records()[0].id.clone();
    app.delete_record(&first_id);
    assert_eq!(app.records.records().len(), 2);

    app.open_admin_login();
    app.attempt_admin_login("2025");
    assert_eq!(app.dashboard_stats().attempts, 2);
    assert_eq!(app.dashboard_stats().average_points, 75);

    app.delete_record("does-not-exist");
    assert_eq!(app.records.records().len(), 2);

    app.delete_record(&first_id);
    assert_eq!(app.records.records().len(), 1);
    assert_eq!(app.records.records()[0].score, 20);

    let mut reopened = RecordStore::open(backend);
    assert!(reopened.load_all().iter().all(|r| r.id != first_id));
}

#[test]
fn reset_keeps_persisted_records() {
    let (mut app, _backend) = app_with(Arc::new(Reply("ok")));
    play_through(&mut app, 7);
    app.reset();

    assert_eq!(app.state.score, 0);
    assert!(app.state.user_answers.is_empty());
    assert_eq!(app.records.records().len(), 1);
}
