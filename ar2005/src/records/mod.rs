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

//! The elements of an AR2005 antenatal record.
//!
//! A record set holds any number of [`ARRecord`]s. Each record is split into
//! the first part [`AR1`], filled at the initial visit, and the second part
//! [`AR2`] tracking risk factors and subsequent visits.
//!
//! Every element derives its accessors. For example, the pregnancy history
//! of a record is populated like this:
//!
//! ```
//! use ar2005::records::ARRecord;
//! use ar2005::Date;
//!
//! # fn main() -> Result<(), ar2005::Error> {
//! let mut record = ARRecord::default();
//! let history = record.add_new_ar1().add_new_pregnancy_history();
//!
//! history.set_lmp(Date::from_ymd(2024, 1, 12).unwrap());
//! history.xset_gravida("2")?;
//! history.add_new_lmp_certain().set_yes(true);
//!
//! assert_eq!(history.gravida(), Some(2));
//! # Ok(())
//! # }
//! ```

mod ar1;
mod ar2;
mod labs;
mod medical;
mod patient;
mod practitioner;
mod pregnancy;
mod record;
mod signature;
mod visits;

pub use ar1::AR1;
pub use ar2::AR2;
pub use labs::{
    AdditionalLabInvestigationsType, CustomLab, InitialLaboratoryInvestigations,
    PrenatalGeneticScreeningType,
};
pub use medical::{
    CurrentPregnancyType, FamilyHistoryType, GenericHistoryType, InfectiousDiseaseType,
    MedicalHistoryAndPhysicalExam, MedicalHistoryType, PhysicalExaminationType,
    PsychosocialType,
};
pub use patient::{Occupation, PartnerInformation, PatientInformation};
pub use practitioner::{BirthAttendants, NewbornCare, PractitionerInformation};
pub use pregnancy::{DatingMethods, ObstetricalHistory, ObstetricalHistoryItemList, PregnancyHistory};
pub use record::{ARRecord, ARRecordSet};
pub use signature::SignatureType;
pub use visits::{
    DiscussionTopicsType, RecommendedImmunoprophylaxisType, RiskFactorItemType,
    SubsequentVisitItemType, UltrasoundType,
};
