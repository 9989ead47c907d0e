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

xml_enum! {
    /// HIV test result.
    pub enum HivResult("hivResult") {
        /// Positive
        POS => "POS",
        /// Negative
        NEG => "NEG",
        /// Indeterminate
        IND => "IND",
        /// Not done
        NDONE => "NDONE",
        /// Unknown
        UNK => "UNK",
    }
}

xml_enum! {
    /// Result of the gonorrhea, chlamydia, HBsAg, VDRL and sickle cell
    /// screenings.
    pub enum ScreeningResult("screeningResult") {
        /// Positive
        POS => "POS",
        /// Negative
        NEG => "NEG",
        /// Not done
        NDONE => "NDONE",
        /// Unknown
        UNK => "UNK",
    }
}

xml_enum! {
    /// Group B streptococcus screening.
    pub enum GbsResult("GBS") {
        /// Not done
        NDONE => "NDONE",
        /// Positive swab
        POSSWAB => "POSSWAB",
        /// Positive urine
        POSURINE => "POSURINE",
        /// Negative swab
        NEGSWAB => "NEGSWAB",
        /// Done, result unknown
        DONEUNK => "DONEUNK",
        /// Unknown
        UNK => "UNK",
    }
}
