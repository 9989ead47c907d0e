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

use serde::{Deserialize, Serialize};

use crate::{Error, XmlValue};

/// Educational attainment of the partner.
///
/// The code list isn't closed, any code is accepted as is.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EducationLevel(String);

/// Occupation code of the partner.
///
/// The code list isn't closed, any code is accepted as is.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupationValue(String);

macro_rules! open_code {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub fn new(code: impl Into<String>) -> Self {
                    Self(code.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl From<&str> for $name {
                fn from(code: &str) -> Self {
                    Self::new(code)
                }
            }

            impl From<String> for $name {
                fn from(code: String) -> Self {
                    Self(code)
                }
            }

            impl XmlValue for $name {
                fn from_xml(lexical: &str) -> Result<Self, Error> {
                    Ok(Self::new(lexical.trim()))
                }

                fn to_xml(&self) -> String {
                    self.0.clone()
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )+
    };
}

open_code!(EducationLevel, OccupationValue);
