//! Threat feed model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a detected threat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatType {
    Phishing,
    Ransomware,
    BruteForce,
    Malware,
    SuspiciousLogin,
}

impl ThreatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatType::Phishing => "Phishing",
            ThreatType::Ransomware => "Ransomware",
            ThreatType::BruteForce => "Brute Force",
            ThreatType::Malware => "Malware",
            ThreatType::SuspiciousLogin => "Suspicious Login",
        }
    }
}

impl std::fmt::Display for ThreatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Severity::Low => 0,
            Severity::Medium => 1,
            Severity::High => 2,
            Severity::Critical => 3,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a threat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatStatus {
    Active,
    Contained,
    Investigating,
}

impl ThreatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatStatus::Active => "Active",
            ThreatStatus::Contained => "Contained",
            ThreatStatus::Investigating => "Investigating",
        }
    }
}

impl std::fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the live threat feed
///
/// Rows are independent of each other; list order is generation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatRecord {
    pub timestamp: DateTime<Utc>,
    pub threat_type: ThreatType,
    pub severity: Severity,
    pub source_ip: String,
    pub status: ThreatStatus,
    pub device: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical.level() > Severity::High.level());
        assert!(Severity::High.level() > Severity::Medium.level());
        assert!(Severity::Medium.level() > Severity::Low.level());
    }

    #[test]
    fn test_threat_type_display() {
        assert_eq!(ThreatType::BruteForce.to_string(), "Brute Force");
        assert_eq!(ThreatType::SuspiciousLogin.to_string(), "Suspicious Login");
    }

    #[test]
    fn test_status_serializes_pascal_case() {
        let json = serde_json::to_string(&ThreatStatus::Investigating).unwrap();
        assert_eq!(json, "\"Investigating\"");
    }
}
