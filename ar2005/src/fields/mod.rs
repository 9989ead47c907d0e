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

//! Field types shared by the record elements.
//!
//! Most fields are closed vocabularies of codes. [`EducationLevel`] and
//! [`OccupationValue`] are open code lists whose values are passed through
//! unchecked.

mod blood;
mod code;
mod history;
mod screening;
mod tristate;

pub use blood::{AboResult, BloodGroup, RhFactor};
pub use code::{EducationLevel, OccupationValue};
pub use history::{CigsPerDay, EthnicValueType, Sex, TypeOfDelivery};
pub use screening::{GbsResult, HivResult, ScreeningResult};
pub use tristate::{NormalAbnormalNullType, YesNoNullType};
