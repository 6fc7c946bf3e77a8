use std::io;
use std::sync::{Arc, Mutex};

use quire_fixtures::{sample_document, sample_document_with};
use quire_theme::{CollectingDiagnostics, FieldIssue, FieldWarning, ThemeLoader, keys};
use serde_json::{Map, json};
use tracing_subscriber::EnvFilter;

/// Log output captured from a `tracing-subscriber` fmt layer.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(filter: &str, f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

fn collect(document: &serde_json::Value) -> Vec<FieldWarning> {
    let sink = Arc::new(CollectingDiagnostics::new());
    ThemeLoader::with_shared_diagnostics(sink.clone()).from_value(document);
    sink.take()
}

#[test]
fn valid_document_reports_nothing() {
    let warnings = collect(&sample_document(Map::new()));
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}

#[test]
fn missing_keys_are_reported_as_missing() {
    let warnings = collect(&json!({ "defaults": { "paragraph": { "alignment": "left" } } }));

    assert_eq!(warnings.len(), 11);
    assert!(warnings.iter().all(FieldWarning::is_missing));
    assert!(warnings.iter().all(|w| w.key != keys::ALIGNMENT));
}

#[test]
fn unknown_literal_is_described() {
    let warnings = collect(&sample_document_with(keys::ALIGNMENT, "badValue"));

    assert_eq!(
        warnings,
        vec![FieldWarning {
            key: keys::ALIGNMENT,
            issue: FieldIssue::UnknownLiteral {
                value: "badValue".to_string()
            },
            fallback: "natural",
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "paragraph alignment: unknown value [badValue], assuming [natural]"
    );
}

#[test]
fn wrong_type_is_described() {
    let warnings = collect(&sample_document_with(keys::LINE_BREAK_MODE, 12.3));

    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].issue,
        FieldIssue::WrongType {
            expected: "string",
            found: "number"
        }
    );
    assert_eq!(warnings[0].fallback, "wordWrapping");
}

#[test]
fn negative_length_is_described() {
    let warnings = collect(&sample_document_with(keys::LINE_SPACING, -0.5));

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, keys::LINE_SPACING);
    assert_eq!(warnings[0].issue, FieldIssue::Negative { value: -0.5 });
    assert_eq!(warnings[0].fallback, "0.0");
}

#[test]
fn take_drains_the_sink() {
    let sink = Arc::new(CollectingDiagnostics::new());
    let loader = ThemeLoader::with_shared_diagnostics(sink.clone());
    loader.from_value(&sample_document_with(keys::HEAD_INDENT, "badValue"));

    assert_eq!(sink.invalid().len(), 1);
    assert_eq!(sink.take().len(), 1);
    assert!(sink.take().is_empty());
}

#[test]
fn closures_are_sinks() {
    let keys_seen = Arc::new(Mutex::new(Vec::new()));
    let seen = keys_seen.clone();
    let loader = ThemeLoader::with_diagnostics(move |warning: &FieldWarning| {
        seen.lock().unwrap().push(warning.key);
    });

    loader.from_value(&sample_document_with(keys::WRITING_DIRECTION, 4.5));
    assert_eq!(*keys_seen.lock().unwrap(), vec![keys::WRITING_DIRECTION]);
}

#[test]
fn silent_loader_logs_nothing() {
    let logs = capture("trace", || {
        ThemeLoader::silent().from_value(&sample_document_with(keys::ALIGNMENT, "badValue"));
    });
    assert!(logs.is_empty(), "unexpected output: {logs}");
}

#[test]
fn default_sink_warns_on_invalid_values() {
    let logs = capture("warn", || {
        ThemeLoader::new().from_value(&sample_document_with(keys::ALIGNMENT, "badValue"));
    });

    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("invalid paragraph field"), "{logs}");
    assert!(logs.contains("alignment"), "{logs}");
}

#[test]
fn default_sink_logs_missing_keys_at_debug() {
    let document = json!({ "defaults": { "paragraph": {} } });

    let at_warn = capture("warn", || {
        quire_theme::from_value(&document);
    });
    assert!(at_warn.is_empty(), "{at_warn}");

    let at_debug = capture("quire_theme=debug", || {
        quire_theme::from_value(&document);
    });
    assert!(at_debug.contains("paragraph field not set"), "{at_debug}");
    assert!(at_debug.contains("lineSpacing"), "{at_debug}");
}

#[test]
fn load_failures_are_logged() {
    let logs = capture("error", || {
        let _ = quire_theme::load_from_string("badName:badValue");
    });
    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("unable to parse theme JSON"), "{logs}");
}

#[test]
fn non_object_paragraph_is_logged_at_debug() {
    let document = json!({ "defaults": { "paragraph": 5 } });
    let logs = capture("quire_theme=debug", || {
        quire_theme::from_value(&document);
    });
    assert!(logs.contains("paragraph style is not an object"), "{logs}");
    assert!(logs.contains("number"), "{logs}");
}

#[test]
fn negative_zero_is_not_reported() {
    let warnings = collect(&sample_document_with(keys::LINE_SPACING, -0.0));
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}
