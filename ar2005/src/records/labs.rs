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

//! Laboratory investigations.

use serde::{Deserialize, Serialize};

use crate::fields::{AboResult, BloodGroup, GbsResult, HivResult, RhFactor, ScreeningResult};
use crate::{Date, Element, Nillable};

/// Laboratory results of the initial visit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialLaboratoryInvestigations {
    /// Haemoglobin.
    #[serde(skip_serializing_if = "Option::is_none")]
    hb_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hiv_result: Option<HivResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hiv_counsel: Option<bool>,
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    last_pap_date: Option<Nillable<Date>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pap_result: Option<String>,
    /// Mean corpuscular volume.
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    mcv_result: Option<Nillable<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    abo_result: Option<AboResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rh_result: Option<RhFactor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    antibody_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gc_result_gonorrhea: Option<ScreeningResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gc_result_chlamydia: Option<ScreeningResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rubella_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    urine_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hbs_ag_result: Option<ScreeningResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vdrl_result: Option<ScreeningResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sickle_cell_result: Option<ScreeningResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    prenatal_generic_screening: Option<PrenatalGeneticScreeningType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    custom_lab1: Option<CustomLab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    custom_lab2: Option<CustomLab>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct PrenatalGeneticScreeningType {
    /// Maternal serum, integrated prenatal or first trimester screening.
    #[serde(rename = "MSS_IPS_FTS", skip_serializing_if = "Option::is_none")]
    mss_ips_fts: Option<String>,
    #[serde(rename = "EDB_CVS", skip_serializing_if = "Option::is_none")]
    edb_cvs: Option<String>,
    /// Maternal serum alpha-fetoprotein.
    #[serde(rename = "MSAFP", skip_serializing_if = "Option::is_none")]
    msafp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    custom_lab1: Option<CustomLab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    declined: Option<bool>,
}

/// A lab investigation not covered by the form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default)]
pub struct CustomLab {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
}

/// Lab investigations repeated during the pregnancy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct AdditionalLabInvestigationsType {
    #[serde(skip_serializing_if = "Option::is_none")]
    hb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blood_group: Option<BloodGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rh: Option<RhFactor>,
    #[serde(rename = "repeatABS", skip_serializing_if = "Option::is_none")]
    repeat_abs: Option<String>,
    /// Glucose challenge test.
    #[serde(rename = "GCT", skip_serializing_if = "Option::is_none")]
    gct: Option<String>,
    /// Glucose tolerance test.
    #[serde(rename = "GTT", skip_serializing_if = "Option::is_none")]
    gtt: Option<String>,
    #[serde(rename = "GBS", skip_serializing_if = "Option::is_none")]
    gbs: Option<GbsResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    custom_lab1: Option<CustomLab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    custom_lab2: Option<CustomLab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    custom_lab3: Option<CustomLab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    custom_lab4: Option<CustomLab>,
}
