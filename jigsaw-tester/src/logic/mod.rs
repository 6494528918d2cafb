pub mod policy;
pub mod reports;
pub mod scenarios;
pub mod simulation;
pub mod tester;

pub use policy::PlayStrategy;
pub use scenarios::{get_scenario, list_scenarios};
pub use tester::*;
