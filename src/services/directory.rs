use crate::core::filters::is_known_blood_group;
use crate::models::{Candidate, CandidateKind, Coordinate};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the candidate directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read directory file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid directory document: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Donor record as stored in the directory file
#[derive(Debug, Clone, Deserialize)]
struct DonorRecord {
    id: String,
    name: String,
    #[serde(rename = "bloodGroup")]
    blood_group: String,
    #[serde(alias = "location")]
    city: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(rename = "availabilityStatus", default = "default_true")]
    availability_status: bool,
    #[serde(default)]
    phone: Option<String>,
}

/// Blood bank record as stored in the directory file
#[derive(Debug, Clone, Deserialize)]
struct BloodBankRecord {
    id: String,
    name: String,
    city: String,
    #[serde(rename = "availableBloodGroups", default)]
    available_blood_groups: Vec<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(rename = "stockStatus", default = "default_stock_status")]
    stock_status: String,
    #[serde(rename = "contactNumber", default)]
    contact_number: Option<String>,
}

fn default_true() -> bool { true }
fn default_stock_status() -> String { "Available".to_string() }

#[derive(Debug, Default, Deserialize)]
struct DirectoryDocument {
    #[serde(default)]
    donors: Vec<DonorRecord>,
    #[serde(rename = "bloodBanks", default)]
    blood_banks: Vec<BloodBankRecord>,
}

impl From<DonorRecord> for Candidate {
    fn from(record: DonorRecord) -> Self {
        Candidate {
            id: record.id,
            kind: CandidateKind::Donor,
            name: record.name,
            blood_group: record.blood_group,
            city: record.city,
            coordinate: Coordinate::from_parts(record.latitude, record.longitude),
            available: record.availability_status,
            contact: record.phone,
        }
    }
}

impl From<BloodBankRecord> for Candidate {
    fn from(record: BloodBankRecord) -> Self {
        Candidate {
            id: record.id,
            kind: CandidateKind::BloodBank,
            name: record.name,
            blood_group: record.available_blood_groups.join(","),
            city: record.city,
            coordinate: Coordinate::from_parts(record.latitude, record.longitude),
            available: stock_available(&record.stock_status),
            contact: record.contact_number,
        }
    }
}

fn stock_available(status: &str) -> bool {
    let status = status.trim();
    !(status.eq_ignore_ascii_case("unavailable") || status.eq_ignore_ascii_case("out of stock"))
}

/// Read-only candidate pool loaded at startup
///
/// Donors come first, then blood banks, each in file order.
#[derive(Debug, Clone, Default)]
pub struct CandidateDirectory {
    candidates: Vec<Candidate>,
}

impl CandidateDirectory {
    /// Parse a directory document of the form `{"donors": [...], "bloodBanks": [...]}`
    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let document: DirectoryDocument = serde_json::from_str(json)?;

        check_unique("donor", document.donors.iter().map(|d| d.id.as_str()))?;
        check_unique("blood bank", document.blood_banks.iter().map(|b| b.id.as_str()))?;

        let candidates: Vec<Candidate> = document
            .donors
            .into_iter()
            .map(Candidate::from)
            .chain(document.blood_banks.into_iter().map(Candidate::from))
            .collect();

        for candidate in &candidates {
            if let Some(tag) = candidate
                .blood_group
                .split(',')
                .filter(|tag| !tag.trim().is_empty())
                .find(|tag| !is_known_blood_group(tag))
            {
                tracing::warn!("Candidate {} has unrecognised blood group {:?}", candidate.id, tag);
            }
        }

        Ok(Self { candidates })
    }

    /// Load a directory document from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let directory = Self::from_json_str(&json)?;

        tracing::info!(
            "Loaded {} candidates from {}",
            directory.len(),
            path.display()
        );

        Ok(directory)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl From<Vec<Candidate>> for CandidateDirectory {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DirectoryError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DirectoryError::DuplicateId { kind, id: id.to_string() });
        }
    }
    Ok(())
}
