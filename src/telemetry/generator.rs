//! Mock Telemetry Generator
//!
//! Synthesizes the full dashboard view-model from the current time and an
//! injected random source. No I/O, no external state: the structural shape
//! (list lengths, field enumerations) is identical on every call and only
//! the uniform draws vary, so a seeded run is fully reproducible.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

use crate::models::{
    ComplianceBreakdown, ComplianceStatus, DashboardViewModel, DeviceRecord, KpiSet, Severity,
    ThreatRecord, ThreatStatus, ThreatType, TrendPoint,
};

// ============================================
// Fixture constants
// ============================================

/// Number of rows in the live threat feed
const THREAT_FEED_LEN: usize = 5;

/// Minute offsets of the feed rows back from `now`
const THREAT_OFFSET_MINUTES: [i64; THREAT_FEED_LEN] = [5, 32, 120, 240, 360];

/// Per-row threat categories, parallel to the offsets
const THREAT_TYPES: [ThreatType; THREAT_FEED_LEN] = [
    ThreatType::Phishing,
    ThreatType::Ransomware,
    ThreatType::BruteForce,
    ThreatType::Malware,
    ThreatType::SuspiciousLogin,
];

/// Per-row severities, parallel to the offsets
const THREAT_SEVERITIES: [Severity; THREAT_FEED_LEN] = [
    Severity::High,
    Severity::Critical,
    Severity::Medium,
    Severity::High,
    Severity::Low,
];

/// Per-row statuses, parallel to the offsets
const THREAT_STATUSES: [ThreatStatus; THREAT_FEED_LEN] = [
    ThreatStatus::Active,
    ThreatStatus::Contained,
    ThreatStatus::Investigating,
    ThreatStatus::Active,
    ThreatStatus::Investigating,
];

/// Managed fleet size and how many of them scan clean
const DEVICE_COUNT: usize = 10;
const COMPLIANT_DEVICES: usize = 7;

/// Trend window length in days
const TREND_DAYS: u32 = 30;

// KPI scalars are deliberate literals: the mock feed does not drive them.
const KPI_ACTIVE_THREATS: u32 = 5;
const KPI_PHISHING_ATTEMPTS: u32 = 12;
const KPI_DEVICES_TOTAL: u32 = 42;
const KPI_DEVICES_UNSAFE: u32 = 7;
const KPI_ZERO_TRUST_SCORE: u32 = 78;

// ============================================
// Generator
// ============================================

/// Produces a fresh [`DashboardViewModel`] per render cycle.
///
/// Total and infallible: there is nothing to parse and nothing to fetch.
pub struct MockTelemetryGenerator;

impl MockTelemetryGenerator {
    pub fn generate(now: DateTime<Utc>, rng: &mut impl Rng) -> DashboardViewModel {
        let threats = Self::threat_feed(now, rng);
        let devices = Self::device_fleet(now, rng);
        let compliance = ComplianceBreakdown::from_devices(&devices);

        DashboardViewModel {
            generated_at: now,
            threats,
            devices,
            kpis: Self::kpis(),
            threat_trend: Self::threat_trend(rng),
            compliance,
        }
    }

    /// Five fixed rows walking back from `now`; only the source IP varies.
    fn threat_feed(now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<ThreatRecord> {
        THREAT_OFFSET_MINUTES
            .iter()
            .enumerate()
            .map(|(i, offset)| ThreatRecord {
                timestamp: now - Duration::minutes(*offset),
                threat_type: THREAT_TYPES[i],
                severity: THREAT_SEVERITIES[i],
                source_ip: format!("192.168.1.{}", rng.gen_range(0..100)),
                status: THREAT_STATUSES[i],
                device: device_name(i),
            })
            .collect()
    }

    /// Ten letter-indexed devices with a fixed 7/3 compliance split.
    /// Scan recency is drawn independently per device, so the list carries
    /// no ordering guarantee on `last_scanned`.
    fn device_fleet(now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<DeviceRecord> {
        (0..DEVICE_COUNT)
            .map(|i| DeviceRecord {
                device: device_name(i),
                status: if i < COMPLIANT_DEVICES {
                    ComplianceStatus::Compliant
                } else {
                    ComplianceStatus::NonCompliant
                },
                last_scanned: now - Duration::hours(rng.gen_range(1..=72)),
            })
            .collect()
    }

    fn kpis() -> KpiSet {
        KpiSet {
            active_threats: KPI_ACTIVE_THREATS,
            phishing_attempts: KPI_PHISHING_ATTEMPTS,
            devices_total: KPI_DEVICES_TOTAL,
            devices_unsafe: KPI_DEVICES_UNSAFE,
            zero_trust_score: KPI_ZERO_TRUST_SCORE,
        }
    }

    /// Thirty consecutive days from the fixed anchor, one uniform draw each.
    fn threat_trend(rng: &mut impl Rng) -> Vec<TrendPoint> {
        let anchor = trend_anchor();
        (0..TREND_DAYS)
            .map(|day| TrendPoint {
                date: anchor + Duration::days(i64::from(day)),
                count: rng.gen_range(1..=15),
            })
            .collect()
    }
}

/// First calendar day of the trend window.
fn trend_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid anchor date")
}

/// Letter-indexed device identifier: Device-A, Device-B, ...
fn device_name(index: usize) -> String {
    let letter = (b'A' + index as u8) as char;
    format!("Device-{}", letter)
}

// ============================================
// Tests
// ============================================
