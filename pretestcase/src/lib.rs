//! Pre-test-case generation.
//!
//! A pre-test-case is a scenario with every reference resolved and every
//! value chosen, ready to be written out as a test case by an emitter:
//! - constants are replaced by their values
//! - UI elements are replaced by their UI literals
//! - fill steps without a value are split into one step per target, each
//!   filled with the value the test plan dictates
//! - property references receive the value already typed into the element
//! - "otherwise" clauses of violated properties become oracle steps

mod config;
mod context;
mod error;
mod generator;
mod pre_test_case;
pub mod sentence;

pub use config::{GenerationConfig, PlannerConfig};
pub use context::{ExternalStep, GenContext};
pub use error::{GenError, GenResult};
pub use generator::PreTestCaseGenerator;
pub use pre_test_case::PreTestCase;
