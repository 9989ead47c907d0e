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

use crate::records::{AR1, AR2};
use crate::{Element, ElementList};

/// Root of a document holding any number of antenatal records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default)]
pub struct ARRecordSet {
    #[serde(rename = "ARRecord")]
    ar_record: ElementList<ARRecord>,
}

/// A single antenatal record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default)]
pub struct ARRecord {
    #[serde(rename = "AR1", skip_serializing_if = "Option::is_none")]
    #[element(child)]
    ar1: Option<AR1>,
    #[serde(rename = "AR2", skip_serializing_if = "Option::is_none")]
    #[element(child)]
    ar2: Option<AR2>,
}
