//! Data models

pub mod chart;
pub mod dashboard;
pub mod device;
pub mod kpi;
pub mod threat;

pub use chart::*;
pub use dashboard::*;
pub use device::*;
pub use kpi::*;
pub use threat::*;
