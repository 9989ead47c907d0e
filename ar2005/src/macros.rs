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

/// Implements `Serialize` and `Deserialize` through the type's
/// [`XmlValue`](crate::XmlValue) lexical form.
macro_rules! xml_value_serde {
    ($($t:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $t {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(&$crate::XmlValue::to_xml(self))
                }
            }

            impl<'de> serde::Deserialize<'de> for $t {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let lexical = <String as serde::Deserialize>::deserialize(deserializer)?;
                    <$t as $crate::XmlValue>::from_xml(&lexical).map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

/// Declares a closed vocabulary of codes as an enum.
///
/// The literal after the enum name is used as field name in errors when an
/// unknown code is read.
macro_rules! xml_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($field:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All codes of the vocabulary in schema order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the code as written in the document.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl $crate::XmlValue for $name {
            fn from_xml(lexical: &str) -> Result<Self, $crate::Error> {
                match lexical.trim() {
                    $($code => Ok(Self::$variant),)+
                    _ => Err($crate::Error::InvalidValue {
                        field: $field,
                        value: lexical.to_string(),
                    }),
                }
            }

            fn to_xml(&self) -> String {
                self.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        xml_value_serde!($name);
    };
}
