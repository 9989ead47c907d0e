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

use crate::fields::{Sex, TypeOfDelivery, YesNoNullType};
use crate::{Date, Element, ElementList, Nillable};

/// Menstrual and obstetrical summary of the current pregnancy.
///
/// The last menstrual period, the last use of contraceptives and the
/// menstrual due date may be recorded as nil.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct PregnancyHistory {
    #[serde(
        rename = "LMP",
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    lmp: Option<Nillable<Date>>,
    #[serde(rename = "LMPCertain", skip_serializing_if = "Option::is_none")]
    #[element(child)]
    lmp_certain: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    men_cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    men_cycle_regular: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contraceptive_type: Option<String>,
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    contraceptive_last_used: Option<Nillable<Date>>,
    #[serde(
        rename = "menstrualEDB",
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    menstrual_edb: Option<Nillable<Date>>,
    #[serde(rename = "finalEDB", skip_serializing_if = "Option::is_none")]
    final_edb: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    dating_methods: Option<DatingMethods>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gravida: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    premature: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    abortuses: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    living: Option<i32>,
}

/// Methods used to date the pregnancy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default)]
pub struct DatingMethods {
    #[serde(skip_serializing_if = "Option::is_none")]
    dates: Option<bool>,
    /// First trimester ultrasound
    #[serde(rename = "t1US", skip_serializing_if = "Option::is_none")]
    t1_us: Option<bool>,
    /// Second trimester ultrasound
    #[serde(rename = "t2US", skip_serializing_if = "Option::is_none")]
    t2_us: Option<bool>,
    /// Assisted reproductive technology
    #[serde(skip_serializing_if = "Option::is_none")]
    art: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct ObstetricalHistory {
    obs_list: ElementList<ObstetricalHistoryItemList>,
}

/// One previous pregnancy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct ObstetricalHistoryItemList {
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gest_age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_weight: Option<String>,
    /// Length of labour in hours.
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    length_of_labour: Option<Nillable<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_of_delivery: Option<TypeOfDelivery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}
