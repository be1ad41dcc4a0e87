//! Chart series models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::device::DeviceRecord;

/// One day of the threat trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: u32,
}

/// Device counts grouped by compliance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceBreakdown {
    pub compliant: u32,
    pub non_compliant: u32,
}

impl ComplianceBreakdown {
    /// Tally a device batch by status. This is the one dashboard figure
    /// genuinely derived from the generated records.
    pub fn from_devices(devices: &[DeviceRecord]) -> Self {
        let compliant = devices.iter().filter(|d| d.is_compliant()).count() as u32;
        Self {
            compliant,
            non_compliant: devices.len() as u32 - compliant,
        }
    }

    pub fn total(&self) -> u32 {
        self.compliant + self.non_compliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplianceStatus;
    use chrono::Utc;

    fn device(name: &str, status: ComplianceStatus) -> DeviceRecord {
        DeviceRecord {
            device: name.to_string(),
            status,
            last_scanned: Utc::now(),
        }
    }

    #[test]
    fn test_breakdown_tallies_batch() {
        let devices = vec![
            device("Device-A", ComplianceStatus::Compliant),
            device("Device-B", ComplianceStatus::NonCompliant),
            device("Device-C", ComplianceStatus::Compliant),
        ];
        let breakdown = ComplianceBreakdown::from_devices(&devices);
        assert_eq!(breakdown.compliant, 2);
        assert_eq!(breakdown.non_compliant, 1);
        assert_eq!(breakdown.total(), devices.len() as u32);
    }

    #[test]
    fn test_breakdown_empty_batch() {
        let breakdown = ComplianceBreakdown::from_devices(&[]);
        assert_eq!(breakdown.total(), 0);
    }
}
