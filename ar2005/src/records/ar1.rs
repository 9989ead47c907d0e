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

use crate::records::{
    InitialLaboratoryInvestigations, MedicalHistoryAndPhysicalExam, ObstetricalHistory,
    PartnerInformation, PatientInformation, PractitionerInformation, PregnancyHistory,
    SignatureType,
};
use crate::{Date, DateTime, Element};

/// First part of the antenatal record, filled at the initial visit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct AR1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i32>,
    #[serde(rename = "VersionID", skip_serializing_if = "Option::is_none")]
    version_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    episode_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    demographic_no: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form_created: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form_edited: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    patient_information: Option<PatientInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    partner_information: Option<PartnerInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    practitioner_information: Option<PractitionerInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    pregnancy_history: Option<PregnancyHistory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    obstetrical_history: Option<ObstetricalHistory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    medical_history_and_physical_exam: Option<MedicalHistoryAndPhysicalExam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    initial_laboratory_investigations: Option<InitialLaboratoryInvestigations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    signatures: Option<SignatureType>,
}
