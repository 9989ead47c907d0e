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

use crate::fields::{CigsPerDay, NormalAbnormalNullType, YesNoNullType};
use crate::{Element, Nillable};

/// Medical history and physical examination at the initial visit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicalHistoryAndPhysicalExam {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    current_pregnancy: Option<CurrentPregnancyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    medical_history: Option<MedicalHistoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    generic_history: Option<GenericHistoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    infectious_disease: Option<InfectiousDiseaseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    psychosocial: Option<PsychosocialType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    family_history: Option<FamilyHistoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    physical_examination: Option<PhysicalExaminationType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentPregnancyType {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    bleeding: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    nausea: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    smoking: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cigs_per_day: Option<CigsPerDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    alcohol_drugs: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    occ_env_risks: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    dietary_res: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    calcium_adequate: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    folate: Option<YesNoNullType>,
}

/// Past medical history.
///
/// The element names follow the schema including its spelling, e.g.
/// `endorince` for the endocrine history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicalHistoryType {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    hypertension: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    endorince: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    urinary_tract: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    cardiac: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    liver: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    gynaecology: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    hem: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    surgeries: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    blood_transfusion: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    anesthetics: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    psychiatry: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    epilepsy: Option<YesNoNullType>,
    /// Description of the other medical history.
    #[serde(skip_serializing_if = "Option::is_none")]
    other_descr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    other: Option<YesNoNullType>,
}

/// Genetic history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericHistoryType {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    at_risk: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    developmental_delay: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    congenital_anomolies: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    chromosomal_disorders: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    genetic_disorders: Option<YesNoNullType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct InfectiousDiseaseType {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    varicella: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    std: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    tuberculosis: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_descr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    other: Option<YesNoNullType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct PsychosocialType {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    poort_social_support: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    relationship_problems: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    emotional_depression: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    substance_abuse: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    family_violence: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    parenting_concerns: Option<YesNoNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    religious_cultural: Option<YesNoNullType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct FamilyHistoryType {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    at_risk: Option<YesNoNullType>,
}

/// Findings of the initial physical examination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicalExaminationType {
    /// Height in cm.
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    height: Option<Nillable<f32>>,
    /// Weight in kg.
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    weight: Option<Nillable<f32>>,
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    bmi: Option<Nillable<f32>>,
    /// Blood pressure.
    #[serde(skip_serializing_if = "Option::is_none")]
    bp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    thyroid: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    chest: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    breasts: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    cardiovascular: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    abdomen: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    varicosities: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    exernal_genitals: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    cervix_vagina: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    uterus: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uterus_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    adnexa: Option<NormalAbnormalNullType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_descr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    other: Option<NormalAbnormalNullType>,
}

impl CurrentPregnancyType {
    /// Returns `true` if any of the current pregnancy questions is answered
    /// with yes.
    pub fn has_any_yes(&self) -> bool {
        [
            &self.bleeding,
            &self.nausea,
            &self.smoking,
            &self.alcohol_drugs,
            &self.occ_env_risks,
            &self.dietary_res,
            &self.calcium_adequate,
            &self.folate,
        ]
        .into_iter()
        .flatten()
        .any(|answer| answer.yes() == Some(true))
    }
}
