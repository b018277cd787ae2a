pub mod calculator;
pub mod check;
pub mod config;
pub mod logic;
pub mod policy;
