use serde::{Deserialize, Serialize};

/// 7-day egg collection series for the overview chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySeries {
    /// Exactly 7 consecutive ISO dates ending today, oldest first
    pub labels: Vec<String>,
    /// Eggs collected per date, same order as `labels`
    pub values: Vec<i64>,
}

/// Staff presence KPI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRatio {
    pub present: usize,
    pub total: usize,
}

impl AttendanceRatio {
    /// Rendered as "present/total"; the denominator is floored at 1 so an
    /// empty collection shows "0/1" rather than "0/0".
    pub fn display(&self) -> String {
        format!("{}/{}", self.present, self.total.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_floors_empty_total() {
        let ratio = AttendanceRatio {
            present: 0,
            total: 0,
        };
        assert_eq!(ratio.display(), "0/1");
    }

    #[test]
    fn test_display_normal() {
        let ratio = AttendanceRatio {
            present: 3,
            total: 5,
        };
        assert_eq!(ratio.display(), "3/5");
    }
}
