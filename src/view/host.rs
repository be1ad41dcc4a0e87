//! Render host capability surface
//!
//! The dashboard core never draws pixels itself; it binds data to whatever
//! host sits behind this trait. Swapping the UI stack means swapping the
//! host implementation, nothing else.

/// Chart flavors the dashboard uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Pie,
}

/// A single labeled value within a chart series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Capability surface the view composer draws through.
///
/// Calls arrive in document order, one pass, no read-back: a host only ever
/// receives data, it never feeds anything into the composer.
pub trait RenderHost {
    fn title(&mut self, text: &str);
    fn subheader(&mut self, text: &str);
    fn text(&mut self, text: &str);
    fn metric(&mut self, label: &str, value: &str, delta: Option<&str>, help: Option<&str>);
    fn select(&mut self, label: &str, options: &[&str]);
    fn button(&mut self, label: &str);
    fn table(&mut self, columns: &[&str], rows: &[Vec<String>]);
    fn chart(&mut self, kind: ChartKind, label: &str, points: &[ChartPoint]);
    fn error(&mut self, message: &str);
}

/// Host that lays the dashboard out as a plain-text page.
///
/// Backs the terminal-friendly root endpoint and serves as the reference
/// host implementation.
#[derive(Debug, Default)]
pub struct TextHost {
    buf: String,
}

impl TextHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_page(self) -> String {
        self.buf
    }

    fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }
}

impl RenderHost for TextHost {
    fn title(&mut self, text: &str) {
        self.line(&format!("=== {} ===", text));
    }

    fn subheader(&mut self, text: &str) {
        self.line("");
        self.line(&format!("-- {} --", text));
    }

    fn text(&mut self, text: &str) {
        self.line(text);
    }

    fn metric(&mut self, label: &str, value: &str, delta: Option<&str>, help: Option<&str>) {
        let mut out = format!("{}: {}", label, value);
        if let Some(delta) = delta {
            out.push_str(&format!(" ({})", delta));
        }
        if let Some(help) = help {
            out.push_str(&format!("  [{}]", help));
        }
        self.line(&out);
    }

    fn select(&mut self, label: &str, options: &[&str]) {
        self.line(&format!("{}: [{}]", label, options.join(" | ")));
    }

    fn button(&mut self, label: &str) {
        self.line(&format!("[{}]", label));
    }

    fn table(&mut self, columns: &[&str], rows: &[Vec<String>]) {
        self.line(&columns.join(" | "));
        for row in rows {
            self.line(&row.join(" | "));
        }
    }

    fn chart(&mut self, kind: ChartKind, label: &str, points: &[ChartPoint]) {
        let kind = match kind {
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        };
        self.line(&format!("{} ({})", label, kind));
        for point in points {
            self.line(&format!("  {}: {}", point.label, point.value));
        }
    }

    fn error(&mut self, message: &str) {
        self.line(&format!("ERROR: {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_host_metric_with_help() {
        let mut host = TextHost::new();
        host.metric("Zero Trust Score", "78/100", None, Some("0-100"));
        assert_eq!(host.into_page(), "Zero Trust Score: 78/100  [0-100]\n");
    }

    #[test]
    fn test_text_host_table() {
        let mut host = TextHost::new();
        host.table(&["Device", "Status"], &[vec!["Device-A".into(), "Compliant".into()]]);
        let page = host.into_page();
        assert!(page.contains("Device | Status"));
        assert!(page.contains("Device-A | Compliant"));
    }

    #[test]
    fn test_text_host_chart_points() {
        let mut host = TextHost::new();
        host.chart(
            ChartKind::Pie,
            "Devices by compliance",
            &[ChartPoint::new("Compliant", 7), ChartPoint::new("Non-Compliant", 3)],
        );
        let page = host.into_page();
        assert!(page.contains("Devices by compliance (pie)"));
        assert!(page.contains("  Compliant: 7"));
    }
}
