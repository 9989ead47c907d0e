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
    pub enum Sex("sex") {
        /// Male
        M => "M",
        /// Female
        F => "F",
        /// Ambiguous
        A => "A",
        /// Unknown
        U => "U",
    }
}

xml_enum! {
    /// Type of delivery of a previous pregnancy.
    pub enum TypeOfDelivery("typeOfDelivery") {
        /// Assisted vaginal
        AVAG => "AVAG",
        /// Induced
        IND => "IND",
        /// Caesarean section
        CS => "CS",
        /// Spontaneous vaginal
        SVAG => "SVAG",
        /// Vaginal
        VAG => "VAG",
        /// Unknown
        UN => "UN",
    }
}

xml_enum! {
    /// Number of cigarettes smoked per day.
    pub enum CigsPerDay("cigsPerDay") {
        /// Not recorded, written as an empty element
        Blank => "",
        /// Less than 10
        Less10 => "LESS10",
        /// Up to 20
        Up20 => "UP20",
        /// More than 20
        Over20 => "OVER20",
    }
}

xml_enum! {
    /// Ethnic background of the patient.
    pub enum EthnicValueType("ethnicBackground") {
        ANC001 => "ANC001",
        ANC002 => "ANC002",
        ANC005 => "ANC005",
        ANC007 => "ANC007",
        OTHER => "OTHER",
        /// Unknown
        UN => "UN",
    }
}
