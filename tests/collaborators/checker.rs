//! The session-gated checker end to end.

use crate::common::{assert_results_well_formed, builtin, names, temp_config, test_session};
use symcheck::{SessionError, SymptomChecker, TriageLevel, Vitals};

#[test]
fn test_check_then_record() {
    let (_dir, config) = temp_config();
    let checker = SymptomChecker::new(builtin());
    let session = test_session();

    let text = "fever, cough, loss of smell";
    let report = checker
        .check(&session, text, &Vitals::default())
        .unwrap()
        .expect("non-blank input");
    assert_eq!(report.predictions[0].disease, "covid-19");
    assert_eq!(report.triage.level, TriageLevel::SelfCare);
    assert_results_well_formed(&report.predictions);

    let history = config
        .history_store()
        .record_best_effort(text, report.result_count());
    assert_eq!(history.get(0).unwrap().results, 5);
}

#[test]
fn test_logged_out_session_is_refused() {
    let checker = SymptomChecker::new(builtin());
    let mut session = test_session();
    session.logout();
    let err = checker
        .check(&session, "fever", &Vitals::default())
        .unwrap_err();
    assert!(matches!(err, SessionError::NotAuthenticated));
}

#[test]
fn test_blank_input_is_noop() {
    let checker = SymptomChecker::new(builtin());
    let report = checker
        .check(&test_session(), " ;; ", &Vitals::default())
        .unwrap();
    assert!(report.is_none());
}

#[test]
fn test_unmatched_input_still_triaged() {
    let checker = SymptomChecker::new(builtin());
    let vitals = Vitals {
        spo2: Some(88),
        ..Vitals::default()
    };
    let report = checker
        .check(&test_session(), "purple elephant noises", &vitals)
        .unwrap()
        .unwrap();
    assert!(report.predictions.is_empty());
    assert_eq!(report.result_count(), 0);
    assert_eq!(report.triage.level, TriageLevel::Urgent);
}

#[test]
fn test_fever_vitals_raise_triage() {
    let checker = SymptomChecker::new(builtin());
    let vitals = Vitals {
        temp: Some(39.4),
        ..Vitals::default()
    };
    let report = checker
        .check(&test_session(), "fever", &vitals)
        .unwrap()
        .unwrap();
    assert_eq!(
        names(&report.predictions),
        vec!["gastroenteritis", "influenza (flu)", "covid-19"]
    );
    assert_eq!(report.triage.level, TriageLevel::Consult);
}

#[test]
fn test_report_json_shape() {
    let checker = SymptomChecker::new(builtin());
    let report = checker
        .check(&test_session(), "cough, chest pain", &Vitals::default())
        .unwrap()
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["predictions"][0]["disease"], "bronchitis");
    assert_eq!(value["predictions"][0]["rawScore"], 70);
    assert_eq!(value["triage"]["level"], "urgent");
}
