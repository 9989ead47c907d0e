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
    AdditionalLabInvestigationsType, DiscussionTopicsType, RecommendedImmunoprophylaxisType,
    RiskFactorItemType, SignatureType, SubsequentVisitItemType, UltrasoundType,
};
use crate::{Element, ElementList};

/// Second part of the antenatal record tracking the course of the pregnancy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default, rename_all = "camelCase")]
pub struct AR2 {
    risk_factor_list: ElementList<RiskFactorItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    recommended_immunoprophylaxis: Option<RecommendedImmunoprophylaxisType>,
    subsequent_visit_list: ElementList<SubsequentVisitItemType>,
    ultrasound: ElementList<UltrasoundType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    additional_lab_investigations: Option<AdditionalLabInvestigationsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    discussion_topics: Option<DiscussionTopicsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[element(child)]
    signatures: Option<SignatureType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(factor: &str) -> RiskFactorItemType {
        let mut item = RiskFactorItemType::default();
        item.set_risk_factor(factor);
        item
    }

    #[test]
    fn risk_factor_list() {
        let mut ar2 = AR2::default();
        ar2.set_risk_factor_list_array([risk("smoker"), risk("twins")]);
        assert_eq!(ar2.size_of_risk_factor_list(), 2);

        ar2.set_risk_factor_list_at(1, risk("diabetes")).unwrap();
        ar2.risk_factor_list_at_mut(1)
            .unwrap()
            .set_plan_of_management("GCT at 24w");

        let factors: Vec<_> = ar2
            .risk_factor_list_array()
            .iter()
            .filter_map(RiskFactorItemType::risk_factor)
            .collect();
        assert_eq!(factors, ["smoker", "diabetes"]);
        assert!(ar2.set_risk_factor_list_at(2, risk("anemia")).is_err());
        assert_eq!(ar2.size_of_risk_factor_list(), 2);
    }

    #[test]
    fn visits_are_inserted_in_place() {
        let mut ar2 = AR2::default();
        ar2.add_new_subsequent_visit_list().set_ga("20w");
        ar2.add_new_subsequent_visit_list().set_ga("28w");
        ar2.insert_new_subsequent_visit_list(1).unwrap().set_ga("24w");
        ar2.insert_new_subsequent_visit_list(0).unwrap().set_ga("16w");

        let ga: Vec<_> = ar2
            .subsequent_visit_list_array()
            .iter()
            .filter_map(SubsequentVisitItemType::ga)
            .collect();
        assert_eq!(ga, ["16w", "20w", "24w", "28w"]);

        let removed = ar2.remove_subsequent_visit_list(0).unwrap();
        assert_eq!(removed.ga(), Some("16w"));
        assert_eq!(
            ar2.subsequent_visit_list_at(0).unwrap().ga(),
            Some("20w")
        );
    }
}
