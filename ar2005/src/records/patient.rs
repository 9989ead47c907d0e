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

use crate::fields::{EducationLevel, EthnicValueType, OccupationValue};
use crate::{Date, Element};

/// Demographics of the patient.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    home_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    work_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    /// Health insurance number.
    #[serde(skip_serializing_if = "Option::is_none")]
    hin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_of_birth: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ethnic_background: Option<EthnicValueType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct PartnerInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    occupation: Option<Occupation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    education_level: Option<EducationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<i32>,
}

/// Occupation code with a free text for codes not in the list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default)]
pub struct Occupation {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<OccupationValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other: Option<String>,
}
