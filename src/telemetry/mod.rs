//! Mock telemetry

pub mod generator;

pub use generator::MockTelemetryGenerator;
