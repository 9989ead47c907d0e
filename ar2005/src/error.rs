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

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An XML reading or writing error from the underlying parser.
    Xml(String),
    /// Reading or writing a document failed.
    Io(String),
    /// The document's root element is not the one expected.
    UnexpectedRoot { expected: String, found: String },
    /// A lexical value isn't valid for the element's type or vocabulary.
    InvalidValue { field: &'static str, value: String },
    /// No element of a repeated element exists at the index.
    IndexOutOfBounds {
        element: &'static str,
        index: usize,
        len: usize,
    },
}

impl Error {
    /// Relabels an [`Error::InvalidValue`] with the element it was set on.
    pub fn in_field(self, name: &'static str) -> Self {
        match self {
            Self::InvalidValue { value, .. } => Self::InvalidValue { field: name, value },
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedRoot { expected, found } => {
                write!(f, "expected root element {expected} but found {found}")
            }
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value:?}")
            }
            Self::IndexOutOfBounds {
                element,
                index,
                len,
            } => write!(
                f,
                "index {index} of {element} is out of bounds for {len} element(s)"
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(e: quick_xml::DeError) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<quick_xml::SeError> for Error {
    fn from(e: quick_xml::SeError) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_field_relabels_invalid_values_only() {
        let e = Error::InvalidValue {
            field: "xs:int",
            value: "abc".to_string(),
        };
        assert_eq!(
            e.in_field("gravida"),
            Error::InvalidValue {
                field: "gravida",
                value: "abc".to_string()
            }
        );

        let e = Error::Io("gone".to_string());
        assert_eq!(e.clone().in_field("gravida"), e);
    }
}
