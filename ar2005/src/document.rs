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

//! AR2005 documents.
//!
//! A [`Document`] owns the root element of a record set or single record
//! behind one reader-writer lock. Clones of a document share the same root,
//! so a document can be handed to several threads that read or modify it
//! through [`Document::read`] and [`Document::write`].

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::records::{ARRecord, ARRecordSet};
use crate::{Error, NAMESPACE, XSI_NAMESPACE};

/// An element that can be the root of a document.
pub trait RootElement: Serialize + DeserializeOwned + Default + Clone {
    /// Local name of the root element.
    const ELEMENT: &'static str;
}

impl RootElement for ARRecordSet {
    const ELEMENT: &'static str = "ARRecordSet";
}

impl RootElement for ARRecord {
    const ELEMENT: &'static str = "ARRecord";
}

/// Options to read and write documents.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct XmlOptions {
    indent: Option<(char, usize)>,
    declaration: bool,
    strict_namespace: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: None,
            declaration: true,
            strict_namespace: true,
        }
    }
}

impl XmlOptions {
    /// Indents nested elements by `size` times `indent_char`.
    pub fn pretty_print(mut self, indent_char: char, size: usize) -> Self {
        self.indent = Some((indent_char, size));
        self
    }

    /// Whether to write the `<?xml ...?>` declaration.
    pub fn declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Whether parsing rejects a root element outside the AR2005 namespace.
    ///
    /// When disabled, a root element without namespace or with a foreign
    /// namespace is accepted as long as its local name matches.
    pub fn strict_namespace(mut self, strict: bool) -> Self {
        self.strict_namespace = strict;
        self
    }
}

/// An AR2005 document with root element `T`.
#[derive(Debug)]
pub struct Document<T> {
    root: Arc<RwLock<T>>,
}

/// A document holding a set of records.
pub type ARRecordSetDocument = Document<ARRecordSet>;

/// A document holding a single record.
pub type ARRecordDocument = Document<ARRecord>;

impl<T> Clone for Document<T> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
        }
    }
}

impl<T: RootElement> Default for Document<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RootElement> From<T> for Document<T> {
    fn from(root: T) -> Self {
        Self {
            root: Arc::new(RwLock::new(root)),
        }
    }
}

impl<T: RootElement> Document<T> {
    /// Creates a document with an empty root element.
    pub fn new() -> Self {
        Self::from(T::default())
    }

    /// Parses a document with the default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedRoot`] if the root element isn't a
    /// `T` of the AR2005 namespace and [`Error::Xml`] if the document is
    /// malformed or a value is invalid.
    pub fn parse(xml: &str) -> Result<Self, Error> {
        Self::parse_with(xml, &XmlOptions::default())
    }

    pub fn parse_with(xml: &str, options: &XmlOptions) -> Result<Self, Error> {
        check_root(xml, T::ELEMENT, options.strict_namespace)?;
        let root: T = quick_xml::de::from_str(xml)?;
        debug!("parsed {} document of {} bytes", T::ELEMENT, xml.len());
        Ok(Self::from(root))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Self::from_reader_with(reader, &XmlOptions::default())
    }

    pub fn from_reader_with<R: Read>(mut reader: R, options: &XmlOptions) -> Result<Self, Error> {
        let mut xml = String::new();
        reader.read_to_string(&mut xml)?;
        Self::parse_with(&xml, options)
    }

    /// Reads and parses the document at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::open_with(path, &XmlOptions::default())
    }

    pub fn open_with<P: AsRef<Path>>(path: P, options: &XmlOptions) -> Result<Self, Error> {
        let xml = fs::read_to_string(path.as_ref())?;
        debug!("read {}", path.as_ref().display());
        Self::parse_with(&xml, options)
    }

    /// Calls `f` with shared access to the root element.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.root.read())
    }

    /// Calls `f` with exclusive access to the root element.
    ///
    /// Other readers and writers of this document or its clones block until
    /// `f` returns.
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.root.write())
    }

    /// Returns a copy of the root element.
    pub fn snapshot(&self) -> T {
        self.root.read().clone()
    }

    /// Replaces the root element and returns the previous one.
    pub fn replace(&self, root: T) -> T {
        std::mem::replace(&mut *self.root.write(), root)
    }

    pub fn to_xml(&self) -> Result<String, Error> {
        self.to_xml_with(&XmlOptions::default())
    }

    /// Serializes the document with the AR2005 namespace declared on the
    /// root element.
    pub fn to_xml_with(&self, options: &XmlOptions) -> Result<String, Error> {
        let mut body = String::new();
        {
            let root = self.root.read();
            let mut serializer = quick_xml::se::Serializer::with_root(&mut body, Some(T::ELEMENT))?;
            if let Some((indent_char, size)) = options.indent {
                serializer.indent(indent_char, size);
            }
            root.serialize(serializer)?;
        }

        let open_tag = format!("<{}", T::ELEMENT);
        let Some(rest) = body.strip_prefix(&open_tag) else {
            return Err(Error::Xml(format!("{} wasn't written as root", T::ELEMENT)));
        };

        let mut xml = String::with_capacity(body.len() + 128);
        if options.declaration {
            xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        }
        xml.push_str(&open_tag);
        xml.push_str(&format!(
            " xmlns=\"{NAMESPACE}\" xmlns:xsi=\"{XSI_NAMESPACE}\""
        ));
        xml.push_str(rest);

        debug!("serialized {} document of {} bytes", T::ELEMENT, xml.len());
        Ok(xml)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let xml = self.to_xml()?;
        fs::write(path.as_ref(), xml)?;
        debug!("saved {}", path.as_ref().display());
        Ok(())
    }
}

/// Checks the name and namespace of the document's root element.
fn check_root(xml: &str, element: &'static str, strict: bool) -> Result<(), Error> {
    let mut reader = NsReader::from_str(xml);

    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(e)) | (ns, Event::Empty(e)) => {
                let local = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if local != element {
                    return Err(Error::UnexpectedRoot {
                        expected: element.to_string(),
                        found: local,
                    });
                }

                let found_ns = match ns {
                    ResolveResult::Bound(Namespace(ns)) => String::from_utf8_lossy(ns).into_owned(),
                    _ => String::new(),
                };

                if found_ns != NAMESPACE {
                    if strict {
                        return Err(Error::UnexpectedRoot {
                            expected: format!("{{{NAMESPACE}}}{element}"),
                            found: format!("{{{found_ns}}}{local}"),
                        });
                    }
                    warn!("accepting {element} root in namespace {found_ns:?}");
                }

                return Ok(());
            }
            (_, Event::Eof) => {
                return Err(Error::Xml("document has no root element".to_string()));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Date;

    const RECORD_SET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ARRecordSet xmlns="http://www.oscarmcmaster.org/AR2005" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <ARRecord>
    <AR1>
      <demographicNo>42</demographicNo>
      <pregnancyHistory>
        <LMP xsi:nil="true"/>
        <LMPCertain>
          <yes>false</yes>
          <no>true</no>
        </LMPCertain>
        <finalEDB>2024-10-19</finalEDB>
        <gravida>2</gravida>
      </pregnancyHistory>
    </AR1>
    <AR2/>
  </ARRecord>
  <ARRecord>
    <AR1>
      <demographicNo>43</demographicNo>
    </AR1>
  </ARRecord>
</ARRecordSet>
"#;

    #[test]
    fn parses_record_set() {
        let doc = ARRecordSetDocument::parse(RECORD_SET).unwrap();

        doc.read(|set| {
            assert_eq!(set.size_of_ar_record(), 2);

            let ar1 = set.ar_record_at(0).unwrap().ar1().unwrap();
            assert_eq!(ar1.demographic_no(), Some(42));

            let history = ar1.pregnancy_history().unwrap();
            assert!(history.is_nil_lmp());
            assert_eq!(history.lmp(), None);
            assert_eq!(history.final_edb(), Date::from_ymd(2024, 10, 19));
            assert_eq!(history.gravida(), Some(2));
            assert_eq!(history.lmp_certain().unwrap().answer(), Some(false));

            assert!(set.ar_record_at(0).unwrap().is_set_ar2());
            assert!(!set.ar_record_at(1).unwrap().is_set_ar2());
        });
    }

    #[test]
    fn rejects_wrong_root() {
        let result = ARRecordDocument::parse(RECORD_SET);
        assert_eq!(
            result.err(),
            Some(Error::UnexpectedRoot {
                expected: "ARRecord".to_string(),
                found: "ARRecordSet".to_string(),
            })
        );
    }

    #[test]
    fn namespace_check_can_be_relaxed() {
        let xml = "<ARRecord><AR1><id>7</id></AR1></ARRecord>";

        assert!(matches!(
            ARRecordDocument::parse(xml),
            Err(Error::UnexpectedRoot { .. })
        ));

        let options = XmlOptions::default().strict_namespace(false);
        let doc = ARRecordDocument::parse_with(xml, &options).unwrap();
        assert_eq!(doc.read(|r| r.ar1().and_then(|ar1| ar1.id())), Some(7));
    }

    #[test]
    fn reader_accepts_options() {
        let xml = "<ARRecord><AR1><id>9</id></AR1></ARRecord>";

        assert!(ARRecordDocument::from_reader(xml.as_bytes()).is_err());

        let options = XmlOptions::default().strict_namespace(false);
        let doc = ARRecordDocument::from_reader_with(xml.as_bytes(), &options).unwrap();
        assert_eq!(doc.read(|r| r.ar1().and_then(|ar1| ar1.id())), Some(9));
    }

    #[test]
    fn prefixed_root_is_accepted() {
        let xml = r#"<ar:ARRecord xmlns:ar="http://www.oscarmcmaster.org/AR2005"><ar:AR1><ar:id>7</ar:id></ar:AR1></ar:ARRecord>"#;
        let doc = ARRecordDocument::parse(xml).unwrap();
        assert_eq!(doc.read(|r| r.ar1().and_then(|ar1| ar1.id())), Some(7));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            ARRecordSetDocument::parse(""),
            Err(Error::Xml(_))
        ));
    }

    #[test]
    fn writes_namespaces_and_nil() {
        let doc = ARRecordDocument::new();
        doc.write(|record| {
            let history = record.add_new_ar1().add_new_pregnancy_history();
            history.set_nil_lmp();
            history.set_gravida(1);
        });

        let xml = doc.to_xml_with(&XmlOptions::default().declaration(false)).unwrap();
        assert!(xml.starts_with(
            r#"<ARRecord xmlns="http://www.oscarmcmaster.org/AR2005" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
        ));
        assert!(xml.contains(r#"<LMP xsi:nil="true""#));
        assert!(xml.contains("<gravida>1</gravida>"));

        let parsed = ARRecordDocument::parse(&xml).unwrap();
        assert_eq!(parsed.snapshot(), doc.snapshot());
    }

    #[test]
    fn declaration_and_indent() {
        let doc = ARRecordSetDocument::new();
        doc.write(|set| set.add_new_ar_record().add_new_ar1().set_id(1));

        let xml = doc
            .to_xml_with(&XmlOptions::default().pretty_print(' ', 2))
            .unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ARRecordSet "));
        assert!(xml.contains("\n  <ARRecord>"));
    }

    #[test]
    fn clones_share_the_root() {
        let doc = ARRecordSetDocument::new();
        let clone = doc.clone();

        std::thread::scope(|s| {
            for i in 0..4 {
                let doc = clone.clone();
                s.spawn(move || {
                    doc.write(|set| set.add_new_ar_record().add_new_ar1().set_id(i));
                });
            }
        });

        assert_eq!(doc.read(ARRecordSet::size_of_ar_record), 4);

        let previous = doc.replace(ARRecordSet::default());
        assert_eq!(previous.size_of_ar_record(), 4);
        assert_eq!(clone.read(ARRecordSet::size_of_ar_record), 0);
    }
}
