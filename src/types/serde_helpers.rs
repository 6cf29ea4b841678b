//! Custom serde helpers for mite's wire formats.
//!
//! mite sends calendar dates as plain `YYYY-MM-DD` strings, which `time`
//! does not cover with a built-in serde module.

use serde::{Deserialize, Deserializer, Serializer, de};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Serialize/deserialize a `time::Date` as a `YYYY-MM-DD` string.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use time::{Date, Month};
/// use mite_api_client::types::serde_helpers::iso_date;
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Entry {
///     #[serde(with = "iso_date")]
///     date_at: Date,
/// }
///
/// let json = r#"{"date_at":"2024-03-07"}"#;
/// let entry: Entry = serde_json::from_str(json).unwrap();
/// assert_eq!(entry.date_at, Date::from_calendar_date(2024, Month::March, 7).unwrap());
/// assert_eq!(serde_json::to_string(&entry).unwrap(), json);
/// ```
pub mod iso_date {
    use super::*;

    /// Serialize a date as `YYYY-MM-DD`.
    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date
            .format(ISO_DATE)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    /// Deserialize a `YYYY-MM-DD` string into a date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s, ISO_DATE).map_err(de::Error::custom)
    }
}

/// Like [`iso_date`], for optional dates (`null` or missing becomes `None`).
pub mod option_iso_date {
    use super::*;

    /// Serialize an optional date as `YYYY-MM-DD` or `null`.
    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => iso_date::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional `YYYY-MM-DD` string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| Date::parse(&s, ISO_DATE).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use time::Month;

    #[test]
    fn test_iso_date_pads() {
        #[derive(Serialize)]
        struct Test {
            #[serde(with = "iso_date")]
            date_at: Date,
        }

        let test = Test {
            date_at: Date::from_calendar_date(2023, Month::January, 5).unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&test).unwrap(),
            r#"{"date_at":"2023-01-05"}"#
        );
    }

    #[test]
    fn test_iso_date_rejects_datetime() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Test {
            #[serde(with = "iso_date")]
            date_at: Date,
        }

        let json = r#"{"date_at":"2023-01-05T10:00:00Z"}"#;
        assert!(serde_json::from_str::<Test>(json).is_err());
    }

    #[test]
    fn test_option_iso_date() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Test {
            #[serde(with = "option_iso_date", default)]
            date_at: Option<Date>,
        }

        let test: Test = serde_json::from_str(r#"{"date_at":null}"#).unwrap();
        assert!(test.date_at.is_none());

        let test: Test = serde_json::from_str(r#"{}"#).unwrap();
        assert!(test.date_at.is_none());

        let test: Test = serde_json::from_str(r#"{"date_at":"2022-12-31"}"#).unwrap();
        assert_eq!(
            test.date_at,
            Some(Date::from_calendar_date(2022, Month::December, 31).unwrap())
        );
        assert_eq!(
            serde_json::to_string(&test).unwrap(),
            r#"{"date_at":"2022-12-31"}"#
        );
    }
}
