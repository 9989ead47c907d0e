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

use ar2005::fields::{
    AboResult, BloodGroup, CigsPerDay, EthnicValueType, GbsResult, HivResult, RhFactor,
    ScreeningResult, Sex, TypeOfDelivery,
};
use ar2005::records::ARRecord;
use ar2005::{ARRecordDocument, ARRecordSetDocument, Date, Error, XmlOptions};

const AR_RECORD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ARRecord xmlns="http://www.oscarmcmaster.org/AR2005"
  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">

  <!-- Initial visit -->
  <AR1>
    <id>12</id>
    <VersionID>2</VersionID>
    <episodeId>5</episodeId>
    <demographicNo>1001</demographicNo>
    <providerNo>999998</providerNo>
    <formCreated>2024-03-04</formCreated>
    <formEdited>2024-03-05T09:15:00-05:00</formEdited>
    <patientInformation>
      <lastName>Doe</lastName>
      <firstName>Jane</firstName>
      <dateOfBirth>1991-11-23</dateOfBirth>
      <age>32</age>
      <ethnicBackground>ANC005</ethnicBackground>
    </patientInformation>
    <partnerInformation>
      <lastName>Doe</lastName>
      <occupation>
        <value>OCC12</value>
      </occupation>
      <educationLevel>ED3</educationLevel>
      <age>35</age>
    </partnerInformation>
    <practitionerInformation>
      <birthAttendants>
        <OBS>false</OBS>
        <FP>true</FP>
        <Midwife>false</Midwife>
      </birthAttendants>
      <newbornCare>
        <Ped>true</Ped>
      </newbornCare>
      <familyPhysician>Dr. Smith</familyPhysician>
    </practitionerInformation>
    <pregnancyHistory>
      <LMP>2024-01-20</LMP>
      <LMPCertain>
        <yes>true</yes>
        <no>true</no>
      </LMPCertain>
      <menCycle>28</menCycle>
      <contraceptiveLastUsed xsi:nil="true"/>
      <finalEDB>2024-10-26</finalEDB>
      <datingMethods>
        <dates>true</dates>
        <t1US>true</t1US>
      </datingMethods>
      <gravida>3</gravida>
      <term>1</term>
      <premature>0</premature>
      <abortuses>1</abortuses>
      <living>1</living>
    </pregnancyHistory>
    <obstetricalHistory>
      <obsList>
        <year>2019</year>
        <sex>F</sex>
        <gestAge>39</gestAge>
        <birthWeight>3.4kg</birthWeight>
        <lengthOfLabour>11.5</lengthOfLabour>
        <typeOfDelivery>SVAG</typeOfDelivery>
      </obsList>
      <obsList>
        <year>2021</year>
        <lengthOfLabour xsi:nil="true"/>
        <comments>miscarriage</comments>
      </obsList>
    </obstetricalHistory>
    <medicalHistoryAndPhysicalExam>
      <currentPregnancy>
        <smoking><yes>true</yes></smoking>
        <cigsPerDay>LESS10</cigsPerDay>
      </currentPregnancy>
      <physicalExamination>
        <height>168</height>
        <weight>64.5</weight>
        <bp>118/76</bp>
        <exernalGenitals><normal>true</normal></exernalGenitals>
      </physicalExamination>
    </medicalHistoryAndPhysicalExam>
    <initialLaboratoryInvestigations>
      <hbResult>128</hbResult>
      <hivResult>NEG</hivResult>
      <hivCounsel>1</hivCounsel>
      <aboResult>O</aboResult>
      <rhResult>NEG</rhResult>
      <gcResultChlamydia>NDONE</gcResultChlamydia>
      <customLab1>
        <label>TSH</label>
        <result>1.9</result>
      </customLab1>
    </initialLaboratoryInvestigations>
    <signatures>
      <signature>J. Smith</signature>
      <date>2024-03-04</date>
    </signatures>
  </AR1>

  <!-- Follow-up -->
  <AR2>
    <riskFactorList>
      <riskFactor>Rh negative</riskFactor>
      <planOfManagement>RhIG at 28w</planOfManagement>
    </riskFactorList>
    <recommendedImmunoprophylaxis>
      <rhNegative>true</rhNegative>
      <rhIgGiven>2024-08-03</rhIgGiven>
    </recommendedImmunoprophylaxis>
    <subsequentVisitList>
      <date>2024-04-15</date>
      <ga>12w2d</ga>
      <weight>65.1</weight>
      <bp>120/78</bp>
    </subsequentVisitList>
    <subsequentVisitList>
      <date xsi:nil="true"/>
      <ga>16w</ga>
    </subsequentVisitList>
    <ultrasound>
      <date>2024-04-10</date>
      <ga>11w5d</ga>
      <results>single live IUP</results>
    </ultrasound>
    <additionalLabInvestigations>
      <bloodGroup>O</bloodGroup>
      <rh>NEG</rh>
      <GBS>NEGSWAB</GBS>
    </additionalLabInvestigations>
    <discussionTopics>
      <exercise>true</exercise>
      <PROM>true</PROM>
      <breastFeeding>false</breastFeeding>
    </discussionTopics>
  </AR2>
</ARRecord>
"#;

#[test]
fn initial_visit() {
    let doc = ARRecordDocument::parse(AR_RECORD).expect("record should parse");
    let record = doc.snapshot();
    let ar1 = record.ar1().expect("AR1 should be set");

    assert_eq!(ar1.id(), Some(12));
    assert_eq!(ar1.version_id(), Some(2));
    assert_eq!(ar1.provider_no(), Some("999998"));
    assert_eq!(ar1.form_created(), Date::from_ymd(2024, 3, 4));
    assert_eq!(
        ar1.xget_form_edited().as_deref(),
        Some("2024-03-05T09:15:00-05:00")
    );

    let patient = ar1.patient_information().expect("patient should be set");
    assert_eq!(patient.first_name(), Some("Jane"));
    assert_eq!(patient.ethnic_background(), Some(EthnicValueType::ANC005));

    let partner = ar1.partner_information().expect("partner should be set");
    assert_eq!(
        partner
            .occupation()
            .and_then(|o| o.value())
            .map(|v| v.as_str().to_string()),
        Some("OCC12".to_string())
    );

    let attendants = ar1
        .practitioner_information()
        .and_then(|p| p.birth_attendants())
        .expect("birth attendants should be set");
    assert_eq!(attendants.fp(), Some(true));
    assert_eq!(attendants.other(), None);
}

#[test]
fn pregnancy_and_obstetrical_history() {
    let doc = ARRecordDocument::parse(AR_RECORD).expect("record should parse");

    doc.read(|record| {
        let ar1 = record.ar1().expect("AR1 should be set");
        let history = ar1.pregnancy_history().expect("history should be set");

        assert_eq!(history.lmp(), Date::from_ymd(2024, 1, 20));
        assert!(history.is_nil_contraceptive_last_used());
        assert!(!history.is_set_menstrual_edb());
        assert_eq!(history.gravida(), Some(3));
        assert_eq!(history.premature(), Some(0));

        // a contradictory answer is kept as read
        let certain = history.lmp_certain().expect("LMPCertain should be set");
        assert!(certain.is_contradictory());

        let obs = ar1.obstetrical_history().expect("obstetrical history");
        assert_eq!(obs.size_of_obs_list(), 2);

        let first = obs.obs_list_at(0).expect("first pregnancy");
        assert_eq!(first.sex(), Some(Sex::F));
        assert_eq!(first.length_of_labour(), Some(11.5));
        assert_eq!(first.type_of_delivery(), Some(TypeOfDelivery::SVAG));

        let second = obs.obs_list_at(1).expect("second pregnancy");
        assert!(second.is_nil_length_of_labour());
        assert_eq!(second.comments(), Some("miscarriage"));
    });
}

#[test]
fn exam_and_labs() {
    let doc = ARRecordDocument::parse(AR_RECORD).expect("record should parse");
    let record = doc.snapshot();
    let ar1 = record.ar1().expect("AR1 should be set");

    let exam = ar1
        .medical_history_and_physical_exam()
        .expect("exam should be set");
    let current = exam.current_pregnancy().expect("current pregnancy");
    assert_eq!(current.cigs_per_day(), Some(CigsPerDay::Less10));
    assert!(current.has_any_yes());

    let physical = exam.physical_examination().expect("physical exam");
    assert_eq!(physical.weight(), Some(64.5));
    assert_eq!(
        physical.exernal_genitals().and_then(|g| g.is_normal()),
        Some(true)
    );

    let labs = ar1
        .initial_laboratory_investigations()
        .expect("labs should be set");
    assert_eq!(labs.hiv_result(), Some(HivResult::NEG));
    assert_eq!(labs.hiv_counsel(), Some(true));
    assert_eq!(labs.abo_result(), Some(AboResult::O));
    assert_eq!(labs.rh_result(), Some(RhFactor::NEG));
    assert_eq!(labs.gc_result_chlamydia(), Some(ScreeningResult::NDONE));
    assert_eq!(labs.gc_result_gonorrhea(), None);
    assert_eq!(labs.custom_lab1().and_then(|l| l.result()), Some("1.9"));
}

#[test]
fn follow_up() {
    let doc = ARRecordDocument::parse(AR_RECORD).expect("record should parse");
    let record = doc.snapshot();
    let ar2 = record.ar2().expect("AR2 should be set");

    assert_eq!(ar2.size_of_risk_factor_list(), 1);
    assert_eq!(ar2.size_of_subsequent_visit_list(), 2);
    assert_eq!(ar2.size_of_ultrasound(), 1);

    let visit = ar2.subsequent_visit_list_at(0).expect("first visit");
    assert_eq!(visit.date(), Date::from_ymd(2024, 4, 15));
    assert_eq!(visit.weight(), Some(65.1));
    assert!(ar2
        .subsequent_visit_list_at(1)
        .expect("second visit")
        .is_nil_date());

    let labs = ar2
        .additional_lab_investigations()
        .expect("additional labs");
    assert_eq!(labs.blood_group(), Some(BloodGroup::O));
    assert_eq!(labs.gbs(), Some(GbsResult::NEGSWAB));

    let topics = ar2.discussion_topics().expect("discussion topics");
    assert_eq!(topics.prom(), Some(true));
    assert_eq!(topics.discussed_count(), 2);

    assert!(matches!(
        ar2.ultrasound_at(1),
        Err(Error::IndexOutOfBounds { index: 1, len: 1, .. })
    ));
}

#[test]
fn written_record_reads_back() {
    let doc = ARRecordDocument::parse(AR_RECORD).expect("record should parse");

    doc.write(|record| {
        let ar2 = record.ar2_mut().expect("AR2 should be set");
        ar2.insert_new_subsequent_visit_list(0)
            .expect("index 0 is always valid")
            .set_ga("8w");
        ar2.remove_ultrasound(0).expect("ultrasound exists");
    });

    let xml = doc
        .to_xml_with(&XmlOptions::default().pretty_print(' ', 2))
        .expect("record should serialize");
    let reread = ARRecordDocument::parse(&xml).expect("written record should parse");

    assert_eq!(reread.snapshot(), doc.snapshot());
    reread.read(|record| {
        let ar2 = record.ar2().expect("AR2 should be set");
        assert_eq!(ar2.size_of_subsequent_visit_list(), 3);
        assert_eq!(ar2.subsequent_visit_list_array()[0].ga(), Some("8w"));
        assert_eq!(ar2.size_of_ultrasound(), 0);
    });
}

#[test]
fn save_and_open() {
    let path = std::env::temp_dir().join(format!("ar2005-{}.xml", std::process::id()));

    let doc = ARRecordSetDocument::new();
    doc.write(|set| {
        let mut record = ARRecord::default();
        record.add_new_ar1().set_demographic_no(7);
        set.add_new_ar_record();
        set.set_ar_record_at(0, record).expect("record 0 exists");
    });
    doc.save(&path).expect("document should be saved");

    let opened = ARRecordSetDocument::open(&path).expect("document should open");
    let _ = std::fs::remove_file(&path);

    assert_eq!(opened.snapshot(), doc.snapshot());
    assert!(matches!(
        ARRecordSetDocument::open(&path),
        Err(Error::Io(_))
    ));
}

#[test]
fn lexical_edge_values_round_trip() {
    let doc = ARRecordDocument::new();
    doc.write(|record| {
        let ar1 = record.add_new_ar1();
        let obs = ar1.add_new_obstetrical_history();
        for lexical in ["INF", "-INF", "NaN"] {
            obs.add_new_obs_list()
                .xset_length_of_labour(lexical)
                .expect("special values are valid floats");
        }
        ar1.add_new_medical_history_and_physical_exam()
            .add_new_current_pregnancy()
            .set_cigs_per_day(CigsPerDay::Blank);
    });

    let xml = doc.to_xml().expect("record should serialize");
    assert!(xml.contains("<lengthOfLabour>INF</lengthOfLabour>"));
    assert!(xml.contains("<lengthOfLabour>-INF</lengthOfLabour>"));
    assert!(xml.contains("<lengthOfLabour>NaN</lengthOfLabour>"));
    assert!(xml.contains("<cigsPerDay/>") || xml.contains("<cigsPerDay></cigsPerDay>"));

    let reread = ARRecordDocument::parse(&xml).expect("written record should parse");
    reread.read(|record| {
        let ar1 = record.ar1().expect("AR1 should be set");
        let obs = ar1.obstetrical_history().expect("obstetrical history");
        let labour: Vec<_> = obs
            .obs_list_array()
            .iter()
            .map(|item| item.length_of_labour())
            .collect();
        assert_eq!(labour[0], Some(f32::INFINITY));
        assert_eq!(labour[1], Some(f32::NEG_INFINITY));
        assert!(labour[2].is_some_and(f32::is_nan));

        let current = ar1
            .medical_history_and_physical_exam()
            .and_then(|exam| exam.current_pregnancy())
            .expect("current pregnancy");
        assert_eq!(current.cigs_per_day(), Some(CigsPerDay::Blank));
    });

    // NaN never compares equal, so compare the written form instead
    assert_eq!(reread.to_xml().expect("record should serialize"), xml);
}

#[test]
fn rust_only_float_spellings_are_rejected() {
    let xml = r#"<ARRecord xmlns="http://www.oscarmcmaster.org/AR2005">
  <AR1><obstetricalHistory><obsList><lengthOfLabour>inf</lengthOfLabour></obsList></obstetricalHistory></AR1>
</ARRecord>"#;

    assert!(matches!(ARRecordDocument::parse(xml), Err(Error::Xml(_))));
}

#[test]
fn numeric_booleans_are_read() {
    let xml = r#"<ARRecord xmlns="http://www.oscarmcmaster.org/AR2005">
  <AR2>
    <discussionTopics>
      <exercise>1</exercise>
      <travel>0</travel>
    </discussionTopics>
  </AR2>
</ARRecord>"#;

    let doc = ARRecordDocument::parse(xml).expect("record should parse");
    let topics = doc
        .snapshot()
        .ar2()
        .and_then(|ar2| ar2.discussion_topics())
        .cloned()
        .expect("discussion topics");
    assert_eq!(topics.exercise(), Some(true));
    assert_eq!(topics.travel(), Some(false));

    let written = doc.to_xml().expect("record should serialize");
    assert!(written.contains("<exercise>true</exercise>"));
    assert!(written.contains("<travel>false</travel>"));
    assert_eq!(
        ARRecordDocument::parse(&written)
            .expect("written record should parse")
            .snapshot(),
        doc.snapshot()
    );
}

#[test]
fn string_content_is_trimmed() {
    let doc = ARRecordDocument::new();
    doc.write(|record| record.add_new_ar1().set_comments("  two  spaces  "));

    let xml = doc.to_xml().expect("record should serialize");
    let reread = ARRecordDocument::parse(&xml).expect("written record should parse");

    // leading and trailing whitespace is dropped, inner whitespace is kept
    assert_eq!(
        reread.read(|record| record.ar1().and_then(|ar1| ar1.comments()).map(str::to_string)),
        Some("two  spaces".to_string())
    );
}

#[test]
fn open_with_lax_namespace() {
    let path = std::env::temp_dir().join(format!("ar2005-lax-{}.xml", std::process::id()));
    std::fs::write(&path, "<ARRecordSet><ARRecord><AR1><id>4</id></AR1></ARRecord></ARRecordSet>")
        .expect("file should be written");

    let strict = ARRecordSetDocument::open(&path);
    let lax = ARRecordSetDocument::open_with(&path, &XmlOptions::default().strict_namespace(false));
    let _ = std::fs::remove_file(&path);

    assert!(matches!(strict, Err(Error::UnexpectedRoot { .. })));
    let doc = lax.expect("lax document should open");
    assert_eq!(doc.read(|set| set.size_of_ar_record()), 1);
}
