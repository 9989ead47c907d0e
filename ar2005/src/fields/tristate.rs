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

use crate::Element;

/// A yes/no answer that may also be recorded as explicitly unanswered.
///
/// The three flags are independent of each other. A document where `yes`
/// and `no` are both set is kept as read, see
/// [`is_contradictory`](Self::is_contradictory).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default)]
pub struct YesNoNullType {
    #[serde(skip_serializing_if = "Option::is_none")]
    yes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    no: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    null: Option<bool>,
}

impl YesNoNullType {
    /// Returns `true` if both `yes` and `no` are checked.
    pub fn is_contradictory(&self) -> bool {
        self.yes == Some(true) && self.no == Some(true)
    }

    /// Returns the single checked answer, if there is one.
    pub fn answer(&self) -> Option<bool> {
        match (self.yes == Some(true), self.no == Some(true)) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}

/// A normal/abnormal finding that may also be recorded as not examined.
///
/// Like [`YesNoNullType`] the flags are independent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Element)]
#[serde(default)]
pub struct NormalAbnormalNullType {
    #[serde(skip_serializing_if = "Option::is_none")]
    normal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    abnormal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    null: Option<bool>,
}

impl NormalAbnormalNullType {
    pub fn is_contradictory(&self) -> bool {
        self.normal == Some(true) && self.abnormal == Some(true)
    }

    /// Returns `Some(true)` if only `normal` is checked and `Some(false)` if
    /// only `abnormal` is.
    pub fn is_normal(&self) -> Option<bool> {
        match (self.normal == Some(true), self.abnormal == Some(true)) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}
