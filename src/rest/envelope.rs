//! Envelope handling for mite's JSON payloads.
//!
//! mite nests every object under its type name: a user arrives as
//! `{"user": {...}}` and a list of projects as `[{"project": {...}}, ...]`.
//! Entity types name their key through [`Resource`], and the helpers here
//! strip or add that wrapper.

use serde::Serialize;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

/// An entity that mite wraps in a single-key JSON envelope.
pub trait Resource: DeserializeOwned {
    /// The key the entity is nested under, e.g. `"time_entry"`.
    const ENVELOPE_KEY: &'static str;
}

/// Unwrap `{key: T}` into `T`.
///
/// Returns `Ok(None)` when the key is missing or `null`.
pub(crate) fn unwrap_one<T: Resource>(body: &str) -> Result<Option<T>, serde_json::Error> {
    let mut value: Value = serde_json::from_str(body)?;
    match value.get_mut(T::ENVELOPE_KEY).map(Value::take) {
        None | Some(Value::Null) => Ok(None),
        Some(inner) => serde_json::from_value(inner).map(Some),
    }
}

/// Unwrap `[{key: T}, ...]` into `Vec<T>`.
///
/// Fails as a whole if any item lacks the key or does not decode.
pub(crate) fn unwrap_list<T: Resource>(body: &str) -> Result<Vec<T>, serde_json::Error> {
    let items: Vec<Value> = serde_json::from_str(body)?;
    items
        .into_iter()
        .map(|mut item| {
            let inner = item
                .get_mut(T::ENVELOPE_KEY)
                .map(Value::take)
                .ok_or_else(|| serde_json::Error::missing_field(T::ENVELOPE_KEY))?;
            serde_json::from_value(inner)
        })
        .collect()
}

/// Wrap a request payload as `{key: payload}`.
pub(crate) fn wrap<P: Serialize>(key: &str, payload: &P) -> Result<Value, serde_json::Error> {
    let mut map = Map::new();
    map.insert(key.to_string(), serde_json::to_value(payload)?);
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Widget {
        id: u64,
    }

    impl Resource for Widget {
        const ENVELOPE_KEY: &'static str = "widget";
    }

    #[test]
    fn test_unwrap_one() {
        let widget: Option<Widget> = unwrap_one(r#"{"widget":{"id":7}}"#).unwrap();
        assert_eq!(widget, Some(Widget { id: 7 }));
    }

    #[test]
    fn test_unwrap_one_missing_or_null_key() {
        assert_eq!(unwrap_one::<Widget>("{}").unwrap(), None);
        assert_eq!(unwrap_one::<Widget>(r#"{"widget":null}"#).unwrap(), None);
        assert_eq!(unwrap_one::<Widget>(r#"{"gadget":{"id":1}}"#).unwrap(), None);
    }

    #[test]
    fn test_unwrap_one_malformed() {
        assert!(unwrap_one::<Widget>("not json").is_err());
        assert!(unwrap_one::<Widget>(r#"{"widget":{"id":"seven"}}"#).is_err());
    }

    #[test]
    fn test_unwrap_list() {
        let widgets: Vec<Widget> =
            unwrap_list(r#"[{"widget":{"id":1}},{"widget":{"id":2}}]"#).unwrap();
        assert_eq!(widgets, vec![Widget { id: 1 }, Widget { id: 2 }]);

        let empty: Vec<Widget> = unwrap_list("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_unwrap_list_is_all_or_nothing() {
        let result = unwrap_list::<Widget>(r#"[{"widget":{"id":1}},{"gadget":{"id":2}}]"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("widget"));
    }

    #[test]
    fn test_wrap() {
        #[derive(Serialize)]
        struct Payload {
            minutes: u32,
        }

        let value = wrap("time_entry", &Payload { minutes: 30 }).unwrap();
        assert_eq!(value, serde_json::json!({"time_entry": {"minutes": 30}}));
    }
}
