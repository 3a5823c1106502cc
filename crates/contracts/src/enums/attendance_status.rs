use serde::{Deserialize, Serialize};

/// Attendance statuses offered by the form.
///
/// The stored field stays an open string; unknown values render as-is and
/// only `Present` counts toward the presence KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

impl AttendanceStatus {
    /// Stored string value
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "On leave",
        }
    }

    pub fn all() -> Vec<AttendanceStatus> {
        vec![
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Leave,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            "Leave" => Some(AttendanceStatus::Leave),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for status in AttendanceStatus::all() {
            assert_eq!(AttendanceStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(AttendanceStatus::from_code("Half-day"), None);
    }
}
