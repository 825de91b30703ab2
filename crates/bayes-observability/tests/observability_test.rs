use std::io;
use std::sync::{Arc, Mutex};

use bayes_core::config::ObservabilityConfig;
use bayes_observability::tracing_setup::spans::names;
use bayes_observability::{events, init_from_config, init_tracing_with_filter};

#[test]
fn second_init_reports_already_installed() {
    // Only one global subscriber per process; later calls must not panic.
    let _first = init_tracing_with_filter("debug");
    assert!(!init_from_config(&ObservabilityConfig::default()));
}

#[test]
fn events_emit_without_subscriber_panics() {
    events::network_loaded("Sprinkler", 4, 2, "abc123");
    events::network_rejected("broken.json", "unstable distribution");
    events::query_completed("Rain", 1, 0.42);
    events::degenerate_posterior("Rain", &[("WetGrass".into(), "maybe".into())]);
    events::lookup_miss("Rain", "true,false", "maybe");
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured_at(level: tracing::Level, emit: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, emit);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn lookup_miss_is_logged_at_debug() {
    let at_debug = captured_at(tracing::Level::DEBUG, || {
        events::lookup_miss("Rain", "true,false", "maybe")
    });
    assert!(at_debug.contains("lookup_miss"));
    assert!(at_debug.contains("DEBUG"));

    let at_info = captured_at(tracing::Level::INFO, || {
        events::lookup_miss("Rain", "true,false", "maybe")
    });
    assert!(!at_info.contains("lookup_miss"));
}

#[test]
fn span_macros_use_declared_names() {
    let load = bayes_observability::load_span!("networks/chain.json");
    let query = bayes_observability::query_span!("B", 0usize);
    let marginals = bayes_observability::marginals_span!(3usize, true);
    for span in [load, query, marginals] {
        if let Some(meta) = span.metadata() {
            assert!([names::LOAD, names::QUERY, names::MARGINALS].contains(&meta.name()));
        }
    }
}
