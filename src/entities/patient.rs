// 🩺 Patient + Prescription Entities
//
// Prescriptions reference their patient through `patient_id` (foreign key to
// Patient::id). The link is not enforced at insert time.

use crate::repository::{Entity, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// GENDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

// ============================================================================
// PATIENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: EntityId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl Patient {
    pub fn new(id: EntityId, name: &str, age: u32, gender: Gender) -> Self {
        Patient {
            id,
            name: name.to_string(),
            age,
            gender,
        }
    }
}

impl Entity for Patient {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Gender: {}",
            self.id,
            self.name,
            self.age,
            self.gender.as_str()
        )
    }
}

// ============================================================================
// PRESCRIPTION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: EntityId,
    pub patient_id: EntityId,
    pub medication_name: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: EntityId,
        patient_id: EntityId,
        medication_name: &str,
        date_issued: NaiveDate,
    ) -> Self {
        Prescription {
            id,
            patient_id,
            medication_name: medication_name.to_string(),
            date_issued,
        }
    }
}

impl Entity for Prescription {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Patient ID: {}, Medication: {}, Issued: {}",
            self.id,
            self.patient_id,
            self.medication_name,
            self.date_issued.format("%Y-%m-%d")
        )
    }
}
