//! Built-in sample templates
//!
//! The degraded-mode fallback: when the remote listing fails, the
//! editor offers these instead of an empty list. Ids are fixed strings
//! so the fallback is deterministic across sessions.

use chrono::{TimeZone, Utc};
use intake_model::{Field, FieldType, Section, SectionId, Template, TemplateId};
use once_cell::sync::Lazy;

static SAMPLES: Lazy<Vec<Template>> = Lazy::new(build_samples);

/// The fixed built-in sample set
#[must_use]
pub fn sample_templates() -> Vec<Template> {
    SAMPLES.clone()
}

fn field(name: &str, data_type: FieldType, required: bool) -> Field {
    Field {
        id: None,
        name: name.to_string(),
        description: None,
        data_type,
        length: None,
        required,
    }
}

fn section(id: &str, name: &str, description: &str) -> Section {
    Section::with_id(SectionId::new(id), name, description)
}

fn build_samples() -> Vec<Template> {
    let created = Utc
        .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let mut chief = section("sample-gi-chief", "Chief Complaint", "Reason for visit");
    chief.fields.push(field("Complaint", FieldType::Textarea, true));
    chief.fields.push(field("Onset Date", FieldType::Date, false));

    let mut hpi = section("sample-gi-hpi", "History of Present Illness", "");
    hpi.fields.push(field("Narrative", FieldType::Textarea, true));
    let mut severity = section("sample-gi-severity", "Severity", "");
    severity.fields.push(field("Pain Scale", FieldType::Number, false));
    hpi.children.push(severity);

    let mut history = section("sample-gi-history", "Medical History", "");
    let mut meds = section("sample-gi-meds", "Medications", "");
    meds.fields.push(field("Current Medications", FieldType::Textarea, false));
    let mut allergies = section("sample-gi-allergies", "Allergies", "");
    allergies.fields.push(field("Drug Allergies", FieldType::Text, true));
    allergies.fields.push(field("No Known Allergies", FieldType::Checkbox, false));
    history.children.push(meds);
    history.children.push(allergies);

    let general = Template {
        id: TemplateId::new("sample-general-intake"),
        name: "General Intake".to_string(),
        description: "Baseline new-patient intake form".to_string(),
        domain: "general".to_string(),
        created,
        sections: vec![chief, hpi, history],
    };

    let mut cardio_hpi = section("sample-ca-hpi", "Cardiac History", "");
    cardio_hpi.fields.push(field("Chest Pain", FieldType::Checkbox, false));
    cardio_hpi.fields.push(field("NYHA Class", FieldType::Dropdown, false));
    let mut vitals = section("sample-ca-vitals", "Vitals", "");
    vitals.fields.push(field("Blood Pressure", FieldType::Text, true));
    vitals.fields.push(field("Heart Rate", FieldType::Number, true));

    let cardiology = Template {
        id: TemplateId::new("sample-cardiology-followup"),
        name: "Cardiology Follow-Up".to_string(),
        description: "Recurring cardiology visit intake".to_string(),
        domain: "cardiology".to_string(),
        created,
        sections: vec![cardio_hpi, vitals],
    };

    vec![general, cardiology]
}
