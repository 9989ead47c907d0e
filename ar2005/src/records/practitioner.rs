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

use crate::Element;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct PractitionerInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    birth_attendants: Option<BirthAttendants>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    newborn_care: Option<NewbornCare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    family_physician: Option<String>,
}

/// Who attends the birth.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default)]
pub struct BirthAttendants {
    /// Obstetrician
    #[serde(rename = "OBS", skip_serializing_if = "Option::is_none")]
    obs: Option<bool>,
    /// Family physician
    #[serde(rename = "FP", skip_serializing_if = "Option::is_none")]
    fp: Option<bool>,
    #[serde(rename = "Midwife", skip_serializing_if = "Option::is_none")]
    midwife: Option<bool>,
    #[serde(rename = "Other", skip_serializing_if = "Option::is_none")]
    other: Option<String>,
}

/// Who cares for the newborn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default)]
pub struct NewbornCare {
    /// Paediatrician
    #[serde(rename = "Ped", skip_serializing_if = "Option::is_none")]
    ped: Option<bool>,
    /// Family physician
    #[serde(rename = "FP", skip_serializing_if = "Option::is_none")]
    fp: Option<bool>,
    #[serde(rename = "Midwife", skip_serializing_if = "Option::is_none")]
    midwife: Option<bool>,
    #[serde(rename = "Other", skip_serializing_if = "Option::is_none")]
    other: Option<String>,
}
