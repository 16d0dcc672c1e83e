// 🏥 Health System App - patients, prescriptions and a per-patient index

use crate::entities::{Gender, Patient, Prescription};
use crate::error::RepoResult;
use crate::grouping::GroupedIndex;
use crate::repository::{EntityId, Repository};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use tracing::debug;

const SEED_PRESCRIPTIONS: [(EntityId, EntityId, &str, (i32, u32, u32)); 5] = [
    (101, 1, "Vitamin C", (2024, 11, 15)),
    (102, 1, "Amoxiclav", (2024, 12, 20)),
    (103, 3, "Funbact 3", (2025, 3, 10)),
    (104, 2, "Codeine syrup", (2025, 4, 5)),
    (105, 2, "Lydia", (2025, 5, 12)),
];

#[derive(Default)]
pub struct HealthSystemApp {
    patients: Repository<Patient>,
    prescriptions: Repository<Prescription>,
    /// Stale after any prescription change until rebuilt
    prescription_map: GroupedIndex<EntityId, Prescription>,
}

impl HealthSystemApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patients(&self) -> &Repository<Patient> {
        &self.patients
    }

    pub fn add_patient(&mut self, patient: Patient) -> RepoResult<()> {
        self.patients.add(patient)
    }

    pub fn add_prescription(&mut self, prescription: Prescription) -> RepoResult<()> {
        self.prescriptions.add(prescription)
    }

    pub fn remove_prescription(&mut self, id: EntityId) -> RepoResult<Prescription> {
        self.prescriptions.remove(id)
    }

    /// Seed patients and prescriptions; stops at the first rejected record
    pub fn seed_data(&mut self) -> Result<()> {
        self.add_patient(Patient::new(1, "Abdul Rashid", 21, Gender::Male))?;
        self.add_patient(Patient::new(2, "Sarah Wahab", 26, Gender::Female))?;
        self.add_patient(Patient::new(3, "Asiedu Nketiah", 70, Gender::Male))?;

        for (id, patient_id, medication, issued) in SEED_PRESCRIPTIONS {
            self.add_dated_prescription(id, patient_id, medication, issued)?;
        }

        Ok(())
    }

    /// Add a prescription issued on `(year, month, day)`; an impossible date is an error
    pub fn add_dated_prescription(
        &mut self,
        id: EntityId,
        patient_id: EntityId,
        medication: &str,
        (year, month, day): (i32, u32, u32),
    ) -> Result<()> {
        let issued = NaiveDate::from_ymd_opt(year, month, day).with_context(|| {
            format!(
                "invalid issue date {}-{:02}-{:02} for prescription {}",
                year, month, day, id
            )
        })?;
        self.add_prescription(Prescription::new(id, patient_id, medication, issued))?;
        Ok(())
    }

    /// Regroup all prescriptions by patient id
    pub fn build_prescription_map(&mut self) {
        self.prescription_map =
            GroupedIndex::build(self.prescriptions.all(), |p| p.patient_id);
        debug!(
            patients = self.prescription_map.key_count(),
            prescriptions = self.prescription_map.total(),
            "built prescription map"
        );
    }

    /// Prescriptions for a patient as of the last map build
    pub fn prescriptions_for(&self, patient_id: EntityId) -> &[Prescription] {
        self.prescription_map.get(&patient_id)
    }

    pub fn print_all_patients<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "All Patients:")?;
        writeln!(out, "-----------------")?;
        for patient in self.patients.iter() {
            writeln!(out, "{}", patient)?;
        }
        writeln!(out)?;
        Ok(())
    }

    pub fn print_prescriptions_for_patient<W: Write>(
        &self,
        out: &mut W,
        patient_id: EntityId,
    ) -> Result<()> {
        let prescriptions = self.prescriptions_for(patient_id);

        if prescriptions.is_empty() {
            writeln!(out, "No prescriptions found for patient ID: {}", patient_id)?;
        } else {
            let name = self
                .patients
                .get(patient_id)
                .map(|p| p.name.as_str())
                .unwrap_or("Unknown patient");
            writeln!(out, "Prescriptions for {} (ID: {}):", name, patient_id)?;
            writeln!(out, "-----------------")?;
            for prescription in prescriptions {
                writeln!(out, "{}", prescription)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    pub fn run<W: Write>(&mut self, out: &mut W, patient_id: EntityId) -> Result<()> {
        if let Err(e) = self.seed_data() {
            writeln!(out, "Error seeding data: {}", e)?;
        }
        self.build_prescription_map();
        self.print_all_patients(out)?;
        self.print_prescriptions_for_patient(out, patient_id)
    }
}
