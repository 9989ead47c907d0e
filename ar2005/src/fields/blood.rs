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
    /// Blood group of the repeated lab investigations.
    pub enum BloodGroup("bloodGroup") {
        A => "A",
        B => "B",
        AB => "AB",
        O => "O",
        /// Unknown
        UN => "UN",
        /// Not done
        ND => "ND",
    }
}

xml_enum! {
    /// ABO blood group of the initial lab investigations.
    pub enum AboResult("aboResult") {
        A => "A",
        B => "B",
        AB => "AB",
        O => "O",
        /// Not done
        NDONE => "NDONE",
        /// Unknown
        UNK => "UNK",
    }
}

xml_enum! {
    /// Rhesus factor.
    pub enum RhFactor("rh") {
        /// Positive
        POS => "POS",
        /// Weak positive
        WPOS => "WPOS",
        /// Negative
        NEG => "NEG",
        /// Not done
        NDONE => "NDONE",
        /// Unknown
        UNK => "UNK",
    }
}
