//! View composition
//!
//! Single-pass, stateless binding of one view-model to a render host.
//! Nothing here reacts to anything: widgets are emitted in document order
//! and the selectors stay wired to no filtering at all.

use crate::middleware::auth::Identity;
use crate::models::DashboardViewModel;

use super::host::{ChartKind, ChartPoint, RenderHost};

/// Static option lists for the inert sidebar controls
const CLIENT_OPTIONS: [&str; 4] = ["All Clients", "Acme Ltd", "Globex", "Initech"];
const TIME_RANGE_OPTIONS: [&str; 3] = ["Last 24 hours", "Last 7 days", "Last 30 days"];

/// Binds a [`DashboardViewModel`] to a [`RenderHost`], once per cycle.
pub struct ViewComposer;

impl ViewComposer {
    /// Run one render pass.
    ///
    /// A missing identity aborts immediately with a single error message;
    /// no dashboard content is emitted in that case.
    pub fn render(
        vm: &DashboardViewModel,
        identity: Option<&Identity>,
        host: &mut dyn RenderHost,
    ) {
        let Some(identity) = identity else {
            host.error("Authentication failed");
            return;
        };

        host.title("Security Dashboard");

        // Sidebar region. Selectors and the refresh button are inert.
        host.subheader("Safebloq");
        host.text(&identity.tenant);
        host.text(&format!("{} ({})", identity.username, identity.role));
        host.select("Client", &CLIENT_OPTIONS);
        host.select("Time range", &TIME_RANGE_OPTIONS);
        host.button("Refresh");

        // KPI row, fixed order
        host.metric(
            "Active Threats",
            &vm.kpis.active_threats.to_string(),
            None,
            None,
        );
        host.metric(
            "Phishing Attempts",
            &vm.kpis.phishing_attempts.to_string(),
            None,
            None,
        );
        host.metric(
            "Devices at Risk",
            &vm.kpis.devices_at_risk_label(),
            None,
            Some("Unsafe devices / total managed"),
        );
        host.metric(
            "Zero Trust Score",
            &vm.kpis.zero_trust_label(),
            None,
            Some("Composite posture, 0-100"),
        );

        // Live threat feed
        host.subheader("Live Threat Feed");
        let threat_rows: Vec<Vec<String>> = vm
            .threats
            .iter()
            .map(|t| {
                vec![
                    t.timestamp.format("%H:%M").to_string(),
                    t.threat_type.to_string(),
                    t.severity.to_string(),
                    t.source_ip.clone(),
                    t.status.to_string(),
                    t.device.clone(),
                ]
            })
            .collect();
        host.table(
            &["Time", "Type", "Severity", "Source IP", "Status", "Device"],
            &threat_rows,
        );

        // Charts, side by side on hosts with columns
        host.subheader("Threat Trend");
        let trend_points: Vec<ChartPoint> = vm
            .threat_trend
            .iter()
            .map(|p| ChartPoint::new(p.date.format("%Y-%m-%d").to_string(), p.count))
            .collect();
        host.chart(ChartKind::Line, "Threats per day", &trend_points);

        host.subheader("Compliance Breakdown");
        host.chart(
            ChartKind::Pie,
            "Devices by compliance",
            &[
                ChartPoint::new("Compliant", vm.compliance.compliant),
                ChartPoint::new("Non-Compliant", vm.compliance.non_compliant),
            ],
        );

        // Device compliance table
        host.subheader("Device Compliance");
        let device_rows: Vec<Vec<String>> = vm
            .devices
            .iter()
            .map(|d| {
                vec![
                    d.device.clone(),
                    d.status.to_string(),
                    d.last_scanned.format("%Y-%m-%d %H:%M").to_string(),
                ]
            })
            .collect();
        host.table(&["Device", "Status", "Last Scanned"], &device_rows);
    }
}
