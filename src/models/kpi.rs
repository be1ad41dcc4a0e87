//! Dashboard KPI scalars

use serde::{Deserialize, Serialize};

/// Summary metrics shown across the top of the dashboard.
///
/// Values are not derived from the record lists; they are filled with
/// independent literals by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSet {
    pub active_threats: u32,
    pub phishing_attempts: u32,
    pub devices_total: u32,
    pub devices_unsafe: u32,
    /// Composite posture metric, 0-100
    pub zero_trust_score: u32,
}

impl KpiSet {
    /// "Devices at Risk" display value, formatted `unsafe/total`
    pub fn devices_at_risk_label(&self) -> String {
        format!("{}/{}", self.devices_unsafe, self.devices_total)
    }

    /// "Zero Trust Score" display value, formatted `score/100`
    pub fn zero_trust_label(&self) -> String {
        format!("{}/100", self.zero_trust_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_labels() {
        let kpis = KpiSet {
            active_threats: 5,
            phishing_attempts: 12,
            devices_total: 42,
            devices_unsafe: 7,
            zero_trust_score: 78,
        };
        assert_eq!(kpis.devices_at_risk_label(), "7/42");
        assert_eq!(kpis.zero_trust_label(), "78/100");
    }
}
