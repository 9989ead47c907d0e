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

//! Typed bindings for the AR2005 antenatal record.
//!
//! The AR2005 schema describes the British Columbia Antenatal Record 2005 as
//! XML in the namespace [`NAMESPACE`]. This crate maps every element of the
//! schema to a Rust type in [`records`] with accessors for its content:
//!
//! - scalars have a getter, a setter, `is_set_*`/`unset_*` and the lexical
//!   `xget_*`/`xset_*` pair reading and writing the XML form,
//! - nillable scalars additionally have `is_nil_*`/`set_nil_*`,
//! - nested elements have `*_mut`, `set_*` and `add_new_*`,
//! - repeated elements have `*_array`, `*_at`, `size_of_*`, `insert_new_*`,
//!   `add_new_*` and `remove_*`.
//!
//! Coded values use the closed vocabularies in [`fields`].
//!
//! # Whitespace
//!
//! Leading and trailing whitespace of element text is dropped when a
//! document is parsed, so a string value set to `"  a  b  "` reads back as
//! `"a  b"`. Whitespace inside the text is kept.
//!
//! # Examples
//!
//! Read a record set and list the demographic number of every record:
//!
//! ```
//! use ar2005::ARRecordSetDocument;
//!
//! # fn main() -> Result<(), ar2005::Error> {
//! let xml = r#"<ARRecordSet xmlns="http://www.oscarmcmaster.org/AR2005">
//!   <ARRecord><AR1><demographicNo>1001</demographicNo></AR1></ARRecord>
//! </ARRecordSet>"#;
//!
//! let doc = ARRecordSetDocument::parse(xml)?;
//! doc.read(|set| {
//!     for record in set.ar_record_array() {
//!         let no = record.ar1().and_then(|ar1| ar1.demographic_no());
//!         println!("{no:?}"); // => "Some(1001)"
//!     }
//! });
//! # Ok(())
//! # }
//! ```
//!
//! Documents are modified under their lock and written back as XML:
//!
//! ```
//! use ar2005::fields::BloodGroup;
//! use ar2005::{ARRecordDocument, XmlOptions};
//!
//! # fn main() -> Result<(), ar2005::Error> {
//! let doc = ARRecordDocument::new();
//! doc.write(|record| {
//!     let labs = record.add_new_ar2().add_new_additional_lab_investigations();
//!     labs.set_blood_group(BloodGroup::O);
//! });
//!
//! let xml = doc.to_xml_with(&XmlOptions::default().pretty_print(' ', 2))?;
//! assert!(xml.contains("<bloodGroup>O</bloodGroup>"));
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod document;
mod error;
mod list;
mod value;

// Re-export the derive macro for convenience
pub(crate) use ar2005_derive::Element;

pub mod fields;
pub mod records;

pub use document::{ARRecordDocument, ARRecordSetDocument, Document, RootElement, XmlOptions};
pub use error::Error;
pub use list::ElementList;
pub use value::{Date, DateTime, Nillable, XmlValue};

/// Namespace of the AR2005 schema.
pub const NAMESPACE: &str = "http://www.oscarmcmaster.org/AR2005";

/// Namespace of the `xsi:nil` attribute.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
