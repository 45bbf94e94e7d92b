//! Composable transforms applied to an event during construction or
//! decoration.

use std::fmt;
use std::sync::Arc;

use super::envelope::Event;

/// A header as a `(key, value)` pair
pub type HeaderEntry = (String, String);

type TransformFn<P> = dyn Fn(Event<P>) -> Event<P> + Send + Sync;

/// One step in an ordered list of event transforms.
///
/// Options are applied by reference, so a single option (or a bundle built
/// with [`with_options`]) can be reused across many events.
pub enum EventOption<P = serde_json::Value> {
    /// Replace the payload
    Payload(P),
    /// Set one header, overwriting any previous value (reserved keys included)
    Header(String, String),
    /// Set headers in order; later entries for the same key win
    Headers(Vec<HeaderEntry>),
    /// Apply nested options in order
    Options(Vec<EventOption<P>>),
    /// Arbitrary transform
    Custom(Arc<TransformFn<P>>),
}

impl<P> EventOption<P> {
    /// Wrap a function as an option
    pub fn from_fn<F>(transform: F) -> Self
    where
        F: Fn(Event<P>) -> Event<P> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(transform))
    }
}

impl<P: Clone> EventOption<P> {
    pub fn apply(&self, mut event: Event<P>) -> Event<P> {
        match self {
            Self::Payload(payload) => {
                event.set_payload(Some(payload.clone()));
                event
            }
            Self::Header(key, value) => {
                event.set_header(key.clone(), value.clone());
                event
            }
            Self::Headers(entries) => {
                for (key, value) in entries {
                    event.set_header(key.clone(), value.clone());
                }
                event
            }
            Self::Options(options) => event.apply(options),
            Self::Custom(transform) => transform(event),
        }
    }
}

impl<P: Clone> Clone for EventOption<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Payload(payload) => Self::Payload(payload.clone()),
            Self::Header(key, value) => Self::Header(key.clone(), value.clone()),
            Self::Headers(entries) => Self::Headers(entries.clone()),
            Self::Options(options) => Self::Options(options.clone()),
            Self::Custom(transform) => Self::Custom(Arc::clone(transform)),
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for EventOption<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payload(payload) => f.debug_tuple("Payload").field(payload).finish(),
            Self::Header(key, value) => f.debug_tuple("Header").field(key).field(value).finish(),
            Self::Headers(entries) => f.debug_tuple("Headers").field(entries).finish(),
            Self::Options(options) => f.debug_tuple("Options").field(options).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

pub fn with_payload<P>(payload: P) -> EventOption<P> {
    EventOption::Payload(payload)
}

pub fn with_header<P>(key: impl Into<String>, value: impl Into<String>) -> EventOption<P> {
    EventOption::Header(key.into(), value.into())
}

pub fn with_headers<P, I, K, V>(entries: I) -> EventOption<P>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    EventOption::Headers(
        entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect(),
    )
}

/// Bundle several options into one
pub fn with_options<P>(options: impl IntoIterator<Item = EventOption<P>>) -> EventOption<P> {
    EventOption::Options(options.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::envelope::{HEADER_AGGREGATE_ID, HEADER_EVENT_ID, HEADER_EVENT_NAME};
    use serde_json::{json, Value};

    #[test]
    fn test_with_payload_replaces_payload() {
        let event: Event = Event::new(
            "PriceChanged",
            &[with_payload(json!(1)), with_payload(json!({"price": 2}))],
        );
        assert_eq!(event.payload(), Some(&json!({"price": 2})));
    }

    #[test]
    fn test_with_headers_last_write_wins() {
        let event: Event = Event::new("X", &[with_headers([("k1", "v1"), ("k1", "v2")])]);
        assert_eq!(event.header("k1"), "v2");
    }

    #[test]
    fn test_with_header_overwrites_reserved_keys() {
        let event: Event = Event::new(
            "X",
            &[with_header(HEADER_EVENT_ID, "fixed"), with_header(HEADER_EVENT_NAME, "Y")],
        );
        assert_eq!(event.id(), "fixed");
        assert_eq!(event.name(), "Y");
    }

    #[test]
    fn test_options_apply_in_order() {
        let event: Event = Event::new(
            "X",
            &[with_header("k", "first"), with_header("k", "second")],
        );
        assert_eq!(event.header("k"), "second");
    }

    #[test]
    fn test_with_options_bundle_is_reusable() {
        let bundle: EventOption = with_options([
            with_header(HEADER_AGGREGATE_ID, "42"),
            with_header("Tenant", "acme"),
        ]);

        let first: Event = Event::new("A", std::slice::from_ref(&bundle));
        let second: Event = Event::new("B", std::slice::from_ref(&bundle));

        for event in [&first, &second] {
            assert_eq!(event.header(HEADER_AGGREGATE_ID), "42");
            assert_eq!(event.header("Tenant"), "acme");
        }
    }

    #[test]
    fn test_pure_options_are_idempotent() {
        let base: Event = Event::new("X", &[]);
        let option: EventOption = with_header("k", "v");

        let once = option.apply(base.clone());
        let twice = option.apply(option.apply(base));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_option() {
        let stamp = EventOption::<Value>::from_fn(|event| {
            let upper = event.name().to_uppercase();
            event.apply(&[with_header("Upper", upper)])
        });
        let event: Event = Event::new("shout", &[stamp]);
        assert_eq!(event.header("Upper"), "SHOUT");
    }

    #[test]
    fn test_debug_hides_custom_transform() {
        let option = EventOption::<Value>::from_fn(|event| event);
        assert_eq!(format!("{:?}", option), "Custom(..)");
        let header: EventOption = with_header("k", "v");
        assert_eq!(format!("{:?}", header), r#"Header("k", "v")"#);
    }
}
