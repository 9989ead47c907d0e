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

use crate::{Date, Element, Nillable};

/// An identified risk factor and how it is managed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskFactorItemType {
    #[serde(skip_serializing_if = "Option::is_none")]
    risk_factor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan_of_management: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendedImmunoprophylaxisType {
    #[serde(skip_serializing_if = "Option::is_none")]
    rh_negative: Option<bool>,
    /// Date Rh immune globulin was given.
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    rh_ig_given: Option<Nillable<Date>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rubella: Option<bool>,
    #[serde(rename = "newbornHepIG", skip_serializing_if = "Option::is_none")]
    newborn_hep_ig: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hep_b_vaccine: Option<bool>,
}

/// Measurements of a follow-up visit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct SubsequentVisitItemType {
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    date: Option<Nillable<Date>>,
    /// Gestational age.
    #[serde(skip_serializing_if = "Option::is_none")]
    ga: Option<String>,
    #[serde(
        deserialize_with = "crate::value::deserialize_nillable",
        skip_serializing_if = "Option::is_none"
    )]
    weight: Option<Nillable<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bp: Option<String>,
    /// Urine protein.
    #[serde(rename = "urinePR", skip_serializing_if = "Option::is_none")]
    urine_pr: Option<String>,
    /// Urine glucose.
    #[serde(rename = "urineGI", skip_serializing_if = "Option::is_none")]
    urine_gi: Option<String>,
    /// Symphysis fundal height.
    #[serde(rename = "SFH", skip_serializing_if = "Option::is_none")]
    sfh: Option<String>,
    #[serde(rename = "presentation_position", skip_serializing_if = "Option::is_none")]
    presentation_position: Option<String>,
    /// Fetal heart rate and movement.
    #[serde(rename = "FHR_fm", skip_serializing_if = "Option::is_none")]
    fhr_fm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct UltrasoundType {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ga: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<String>,
}

/// Topics discussed with the patient during the pregnancy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscussionTopicsType {
    #[serde(skip_serializing_if = "Option::is_none")]
    exercise: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    work_plan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intercourse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    travel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prenatal_classes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_plan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    on_call_providers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preterm_labour: Option<bool>,
    #[serde(rename = "PROM", skip_serializing_if = "Option::is_none")]
    prom: Option<bool>,
    #[serde(rename = "APH", skip_serializing_if = "Option::is_none")]
    aph: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fetal_movement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    admission_timing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pain_management: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labour_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breast_feeding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    circumcision: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    discharge_planning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    car_seat_safety: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    depression: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contraception: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postpartum_care: Option<bool>,
}

impl DiscussionTopicsType {
    /// Returns the number of topics marked as discussed.
    pub fn discussed_count(&self) -> usize {
        [
            self.exercise,
            self.work_plan,
            self.intercourse,
            self.travel,
            self.prenatal_classes,
            self.birth_plan,
            self.on_call_providers,
            self.preterm_labour,
            self.prom,
            self.aph,
            self.fetal_movement,
            self.admission_timing,
            self.pain_management,
            self.labour_support,
            self.breast_feeding,
            self.circumcision,
            self.discharge_planning,
            self.car_seat_safety,
            self.depression,
            self.contraception,
            self.postpartum_care,
        ]
        .into_iter()
        .filter(|topic| *topic == Some(true))
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immunoprophylaxis() {
        let mut immuno = RecommendedImmunoprophylaxisType::default();
        immuno.set_rh_negative(true);
        immuno.set_nil_rh_ig_given();
        immuno.xset_hep_b_vaccine("0").unwrap();

        assert_eq!(immuno.rh_negative(), Some(true));
        assert!(immuno.is_nil_rh_ig_given());
        assert_eq!(immuno.hep_b_vaccine(), Some(false));
        assert_eq!(immuno.newborn_hep_ig(), None);
    }

    #[test]
    fn visit_measurements() {
        let mut visit = SubsequentVisitItemType::default();
        visit.xset_date("2024-05-02").unwrap();
        visit.set_weight(71.2f32);
        visit.set_sfh("26");
        visit.set_fhr_fm("140/+");

        assert_eq!(visit.date(), Date::from_ymd(2024, 5, 2));
        assert_eq!(visit.weight(), Some(71.2));
        assert_eq!(visit.xget_sfh().as_deref(), Some("26"));
        assert_eq!(visit.fhr_fm(), Some("140/+"));
    }

    #[test]
    fn discussion_topics() {
        let mut topics = DiscussionTopicsType::default();
        topics.set_prom(true);
        topics.set_aph(true);
        topics.set_travel(false);
        topics.set_postpartum_care(true);

        assert_eq!(topics.discussed_count(), 3);
        topics.unset_aph();
        assert_eq!(topics.discussed_count(), 2);
    }
}
