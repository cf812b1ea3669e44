use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timestamp;

/// Largest prescription scan the backend accepts (10 MiB).
pub const MAX_PRESCRIPTION_BYTES: usize = 10 * 1024 * 1024;

/// File extensions the backend accepts for prescription scans.
pub const PRESCRIPTION_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

/// Pharmacist review state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionStatus {
    Pending,
    Verified,
    Rejected,
}

impl PrescriptionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uploaded prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    pub id: i64,
    pub user_id: i64,
    pub doctor_name: String,
    #[serde(default)]
    pub hospital_name: Option<String>,
    pub prescription_date: Timestamp,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: PrescriptionStatus,
    #[serde(default)]
    pub verification_notes: Option<String>,
    #[serde(default)]
    pub extracted_medicines: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Prescription {
    /// Whether the prescription can back a cart line. Rejected scans cannot.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.status != PrescriptionStatus::Rejected
    }

    /// Label shown in the prescription picker.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Dr. {} ({}, {})",
            self.doctor_name,
            self.prescription_date.0.format("%Y-%m-%d"),
            self.status
        )
    }
}
