pub mod attendance;
pub mod interval;
pub mod policy;
pub mod reconciliation;
