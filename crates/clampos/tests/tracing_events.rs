//! Structured log events emitted with the `tracing` feature.
//!
//! Run with: `cargo test -p clampos --features tracing`

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use clampos::{Point, PositionNormalizer, Rect, Size, normalize};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Default, Clone)]
struct Captured {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for Captured {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = Captured::default();
        event.record(&mut captured);
        self.events.lock().unwrap().push(captured);
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let recorder = Recorder::default();
    let events = Arc::clone(&recorder.events);
    let subscriber = tracing_subscriber::registry().with(recorder);
    tracing::subscriber::with_default(subscriber, f);
    let out = events.lock().unwrap().clone();
    out
}

#[test]
fn correction_emits_trace_event() {
    let events = capture(|| {
        normalize(
            Point::new(950.0, 100.0),
            Size::new(200.0, 50.0),
            Rect::from_size(800.0, 600.0),
            Size::new(1024.0, 768.0),
        );
    });
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.message, "clamped position");
    assert!(
        event
            .fields
            .contains(&("normalized_x".to_string(), "824.0".to_string()))
    );
    assert!(
        event
            .fields
            .contains(&("viewport_x".to_string(), "true".to_string()))
    );
}

#[test]
fn untouched_pointer_is_silent() {
    let events = capture(|| {
        normalize(
            Point::new(10.0, 10.0),
            Size::new(50.0, 50.0),
            Rect::from_size(800.0, 600.0),
            Size::new(1024.0, 768.0),
        );
    });
    assert!(events.is_empty());
}

#[test]
fn rejected_geometry_emits_debug_event() {
    let normalizer =
        PositionNormalizer::new(Rect::from_size(800.0, 600.0), Size::new(1024.0, 768.0));
    let events = capture(|| {
        let res = normalizer.normalize_checked(Point::new(f64::NAN, 0.0), Size::new(1.0, 1.0));
        assert!(res.is_err());
    });
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "rejected position geometry");
}
