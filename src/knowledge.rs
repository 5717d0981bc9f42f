//! Fixed condition knowledge base.
//!
//! An ordered, immutable table of illustrative condition records. The
//! position of a record in the table is its identity: matcher output and
//! classifier labels both refer back to records by index.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

/// A single condition with its symptom keywords and guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionRecord {
    /// Space-separated canonical symptom keywords.
    pub symptoms_text: String,
    /// Unique display name.
    pub disease_name: String,
    /// Free-text guidance, opaque to matching.
    pub medications: String,
    /// Free-text guidance, opaque to matching.
    pub precautions: String,
}

impl ConditionRecord {
    pub fn new(symptoms: &str, disease: &str, medications: &str, precautions: &str) -> Self {
        Self {
            symptoms_text: symptoms.to_string(),
            disease_name: disease.to_string(),
            medications: medications.to_string(),
            precautions: precautions.to_string(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KnowledgeBaseError {
    #[error("Knowledge base has no records")]
    Empty,

    #[error("Duplicate disease name: {0}")]
    DuplicateDisease(String),
}

/// Ordered, read-only sequence of condition records.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    records: Vec<ConditionRecord>,
}

impl KnowledgeBase {
    /// Build a knowledge base, rejecting empty tables and duplicate names.
    pub fn new(records: Vec<ConditionRecord>) -> Result<Self, KnowledgeBaseError> {
        if records.is_empty() {
            return Err(KnowledgeBaseError::Empty);
        }

        if let Some(name) = first_duplicate_name(&records) {
            return Err(KnowledgeBaseError::DuplicateDisease(name));
        }

        Ok(Self { records })
    }

    /// The built-in table of 15 conditions, validated like any other.
    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        Self::new(builtin_records())
    }

    pub fn get(&self, index: usize) -> Option<&ConditionRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[ConditionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the record with the given disease name.
    pub fn index_of(&self, disease_name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.disease_name == disease_name)
    }
}

fn first_duplicate_name(records: &[ConditionRecord]) -> Option<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .find(|r| !seen.insert(r.disease_name.as_str()))
        .map(|r| r.disease_name.clone())
}

fn builtin_records() -> Vec<ConditionRecord> {
    vec![
        ConditionRecord::new(
            "fever headache body ache fatigue muscle pain chills",
            "Influenza (Flu)",
            "Tamiflu, Acetaminophen, Rest, Fluids",
            "Rest, Stay hydrated, Avoid contact with others, Practice good hygiene",
        ),
        ConditionRecord::new(
            "cough fever difficulty breathing shortness of breath fatigue chest pain",
            "COVID-19",
            "Consult doctor immediately, Isolation, Rest, Monitor oxygen levels",
            "Isolate, Wear mask, Monitor oxygen levels, Seek immediate care if severe",
        ),
        ConditionRecord::new(
            "runny nose sneezing congestion sore throat cough mild fever",
            "Common Cold",
            "Antihistamines, Decongestants, Rest, Warm fluids",
            "Rest, Stay warm, Drink fluids, Practice good hygiene",
        ),
        ConditionRecord::new(
            "stomach pain nausea vomiting diarrhea fever cramps",
            "Gastroenteritis",
            "Oral rehydration, Anti-diarrheal medication, Clear fluids",
            "Stay hydrated, Eat bland foods, Rest, Maintain hygiene",
        ),
        ConditionRecord::new(
            "rash itching redness swelling hives skin irritation",
            "Allergic Reaction",
            "Antihistamines, Avoid allergens, Cool compress, Calamine lotion",
            "Identify triggers, Avoid allergens, Keep skin moisturized, Emergency plan",
        ),
        ConditionRecord::new(
            "severe headache sensitivity to light nausea vomiting aura",
            "Migraine",
            "Pain relievers, Anti-nausea medication, Rest in dark room",
            "Avoid triggers, Maintain sleep schedule, Stress management",
        ),
        ConditionRecord::new(
            "joint pain swelling stiffness fatigue morning stiffness",
            "Rheumatoid Arthritis",
            "NSAIDs, DMARDs, Physical therapy, Joint protection",
            "Regular exercise, Joint protection, Healthy diet, Regular check-ups",
        ),
        ConditionRecord::new(
            "chest pain shortness of breath sweating nausea arm pain",
            "Heart Attack",
            "Immediate medical attention, Aspirin, Nitroglycerin if prescribed",
            "Regular check-ups, Healthy diet, Exercise, Stress management",
        ),
        ConditionRecord::new(
            "frequent urination excessive thirst fatigue blurred vision hunger",
            "Diabetes",
            "Insulin, Oral medications, Blood sugar monitoring, Diet management",
            "Regular monitoring, Healthy diet, Exercise, Foot care",
        ),
        ConditionRecord::new(
            "sore throat difficulty swallowing fever swollen lymph nodes red throat",
            "Strep Throat",
            "Antibiotics, Pain relievers, Rest, Warm salt water gargles",
            "Complete antibiotics, Rest, Avoid contact, Good hygiene",
        ),
        ConditionRecord::new(
            "abdominal pain bloating gas constipation diarrhea cramping",
            "Irritable Bowel Syndrome",
            "Antispasmodics, Fiber supplements, Stress management",
            "Diet management, Stress reduction, Regular exercise",
        ),
        ConditionRecord::new(
            "wheezing shortness of breath chest tightness coughing difficulty breathing",
            "Asthma",
            "Inhalers, Bronchodilators, Avoid triggers, Action plan",
            "Avoid triggers, Regular medication, Action plan, Regular check-ups",
        ),
        ConditionRecord::new(
            "muscle weakness numbness tingling fatigue balance problems vision problems",
            "Multiple Sclerosis",
            "Disease-modifying therapies, Physical therapy, Rest",
            "Regular check-ups, Stress management, Exercise as tolerated",
        ),
        ConditionRecord::new(
            "anxiety restlessness racing heart sweating panic fear",
            "Anxiety Disorder",
            "Anti-anxiety medication, Therapy, Relaxation techniques",
            "Regular therapy, Stress management, Regular exercise, Support system",
        ),
        ConditionRecord::new(
            "depression fatigue loss of interest sleep changes sadness hopelessness",
            "Clinical Depression",
            "Antidepressants, Therapy, Exercise, Sleep hygiene",
            "Regular therapy, Exercise, Social support, Healthy lifestyle",
        ),
    ]
}
