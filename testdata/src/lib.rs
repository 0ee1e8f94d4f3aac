//! Test data for data-driven test cases.
//!
//! This crate decides and produces the values a generated test case types
//! into each UI element:
//! - Boundary value providers for every ordered domain (integers, reals,
//!   string lengths, dates, times, dates and times)
//! - The closed set of data test cases and the classifier that tells, for an
//!   element configuration, whether each one is valid, invalid or incompatible
//! - The data generator that turns a data test case into a concrete value
//! - Seeded random streams, so a run is reproducible from its seed

mod analyzer;
mod cfg;
mod dtc;
mod error;
mod format;
mod generator;
pub mod limits;
pub mod random;
pub mod raw;

pub use analyzer::DataTestCaseAnalyzer;
pub use cfg::Cfg;
pub use dtc::{Boundary, DataTestCase, DtcFamily, ExpectedResult};
pub use error::{DataGenError, DataGenResult};
pub use format::FormatGenerator;
pub use generator::DataGenerator;
pub use random::{RandomString, SeedStream};
pub use raw::{DoubleGenerator, RawDataGenerator, StepRangeGenerator, ValueRange};
