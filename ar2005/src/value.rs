// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lexical XML Schema values.
//!
//! Every scalar of a record converts between its typed value and the
//! lexical form written in the document through [`XmlValue`].

use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// A value with an XML Schema lexical representation.
pub trait XmlValue: Sized {
    /// Parses the value from its lexical form.
    fn from_xml(lexical: &str) -> Result<Self, Error>;

    /// Returns the canonical lexical form of the value.
    fn to_xml(&self) -> String;
}

fn invalid(field: &'static str, lexical: &str) -> Error {
    Error::InvalidValue {
        field,
        value: lexical.to_string(),
    }
}

impl XmlValue for String {
    fn from_xml(lexical: &str) -> Result<Self, Error> {
        Ok(lexical.to_string())
    }

    fn to_xml(&self) -> String {
        self.clone()
    }
}

impl XmlValue for bool {
    fn from_xml(lexical: &str) -> Result<Self, Error> {
        match lexical.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid("xs:boolean", lexical)),
        }
    }

    fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl XmlValue for i32 {
    fn from_xml(lexical: &str) -> Result<Self, Error> {
        lexical
            .trim()
            .parse()
            .map_err(|_| invalid("xs:int", lexical))
    }

    fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl XmlValue for f32 {
    fn from_xml(lexical: &str) -> Result<Self, Error> {
        match lexical.trim() {
            "INF" => Ok(f32::INFINITY),
            "-INF" => Ok(f32::NEG_INFINITY),
            "NaN" => Ok(f32::NAN),
            // Rust also accepts spellings like "inf" that aren't valid here
            s if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => {
                Err(invalid("xs:float", lexical))
            }
            s => s.parse().map_err(|_| invalid("xs:float", lexical)),
        }
    }

    fn to_xml(&self) -> String {
        if self.is_nan() {
            "NaN".to_string()
        } else if *self == f32::INFINITY {
            "INF".to_string()
        } else if *self == f32::NEG_INFINITY {
            "-INF".to_string()
        } else {
            self.to_string()
        }
    }
}

/// Splits an optional `Z` or `±hh:mm` timezone off a lexical value.
///
/// Returns `None` if the timezone is malformed.
fn split_timezone(lexical: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(value) = lexical.strip_suffix('Z') {
        return Some((value, FixedOffset::east_opt(0)));
    }

    let bytes = lexical.as_bytes();
    let len = bytes.len();
    if len < 6 || !matches!(bytes[len - 6], b'+' | b'-') || bytes[len - 3] != b':' {
        return Some((lexical, None));
    }

    let (value, tz) = lexical.split_at(len - 6);
    let hours: i32 = tz[1..3].parse().ok()?;
    let minutes: i32 = tz[4..6].parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }

    let seconds = hours * 3600 + minutes * 60;
    let offset = if tz.starts_with('-') {
        FixedOffset::west_opt(seconds)?
    } else {
        FixedOffset::east_opt(seconds)?
    };

    Some((value, Some(offset)))
}

fn format_timezone(offset: Option<FixedOffset>) -> String {
    match offset.map(|offset| offset.local_minus_utc()) {
        None => String::new(),
        Some(0) => "Z".to_string(),
        Some(seconds) => {
            let sign = if seconds < 0 { '-' } else { '+' };
            let minutes = seconds.abs() / 60;
            format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
        }
    }
}

/// An `xs:date` with an optional timezone.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Date {
    date: NaiveDate,
    offset: Option<FixedOffset>,
}

impl Date {
    /// Creates a date without timezone or `None` if the date doesn't exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
            ..self
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self { date, offset: None }
    }
}

impl XmlValue for Date {
    fn from_xml(lexical: &str) -> Result<Self, Error> {
        let (value, offset) =
            split_timezone(lexical.trim()).ok_or_else(|| invalid("xs:date", lexical))?;
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| invalid("xs:date", lexical))?;
        Ok(Self { date, offset })
    }

    fn to_xml(&self) -> String {
        format!(
            "{}{}",
            self.date.format("%Y-%m-%d"),
            format_timezone(self.offset)
        )
    }
}

/// An `xs:dateTime` with an optional timezone.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct DateTime {
    datetime: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl DateTime {
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
            ..self
        }
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self {
            datetime,
            offset: None,
        }
    }
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
    fn from(datetime: chrono::DateTime<FixedOffset>) -> Self {
        Self {
            datetime: datetime.naive_local(),
            offset: Some(*datetime.offset()),
        }
    }
}

impl XmlValue for DateTime {
    fn from_xml(lexical: &str) -> Result<Self, Error> {
        let (value, offset) =
            split_timezone(lexical.trim()).ok_or_else(|| invalid("xs:dateTime", lexical))?;
        let datetime = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|_| invalid("xs:dateTime", lexical))?;
        Ok(Self { datetime, offset })
    }

    fn to_xml(&self) -> String {
        format!(
            "{}{}",
            self.datetime.format("%Y-%m-%dT%H:%M:%S%.f"),
            format_timezone(self.offset)
        )
    }
}

xml_value_serde!(Date, DateTime);

fn is_false(value: &bool) -> bool {
    !*value
}

/// Writes the element text in its lexical form.
fn serialize_lexical<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: XmlValue,
{
    match value {
        Some(value) => serializer.serialize_str(&value.to_xml()),
        None => serializer.serialize_none(),
    }
}

fn deserialize_lexical<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: XmlValue,
{
    let lexical = String::deserialize(deserializer)?;
    T::from_xml(&lexical).map(Some).map_err(de::Error::custom)
}

/// A scalar element that may be present with `xsi:nil="true"` and no value.
///
/// The value is read and written through its [`XmlValue`] lexical form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: XmlValue", deserialize = "T: XmlValue"))]
pub struct Nillable<T> {
    #[serde(
        rename(serialize = "@xsi:nil", deserialize = "@nil"),
        default,
        skip_serializing_if = "is_false"
    )]
    nil: bool,
    #[serde(
        rename = "$text",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_lexical",
        deserialize_with = "deserialize_lexical"
    )]
    value: Option<T>,
}

impl<T> Nillable<T> {
    pub fn new(value: T) -> Self {
        Self {
            nil: false,
            value: Some(value),
        }
    }

    /// Returns an element marked as nil.
    pub fn nil() -> Self {
        Self {
            nil: true,
            value: None,
        }
    }

    pub fn is_nil(&self) -> bool {
        self.nil
    }

    /// Returns the value unless the element is nil.
    pub fn value(&self) -> Option<&T> {
        if self.nil {
            None
        } else {
            self.value.as_ref()
        }
    }
}

/// Deserializes a present nillable element.
///
/// Going through `Option`'s deserializer would read an element with
/// `xsi:nil="true"` as absent.
pub(crate) fn deserialize_nillable<'de, D, T>(deserializer: D) -> Result<Option<Nillable<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: XmlValue,
{
    Nillable::deserialize(deserializer).map(Some)
}

impl<T> From<T> for Nillable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
