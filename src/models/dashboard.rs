//! Dashboard view-model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chart::{ComplianceBreakdown, TrendPoint};
use super::device::DeviceRecord;
use super::kpi::KpiSet;
use super::threat::ThreatRecord;

/// Everything one render cycle binds to.
///
/// Produced once per cycle by the telemetry generator, read-only for the
/// duration of the render, discarded afterwards. Nothing is cached across
/// cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardViewModel {
    pub generated_at: DateTime<Utc>,
    pub threats: Vec<ThreatRecord>,
    pub devices: Vec<DeviceRecord>,
    pub kpis: KpiSet,
    pub threat_trend: Vec<TrendPoint>,
    pub compliance: ComplianceBreakdown,
}
