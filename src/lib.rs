//! PRNG Validation Library
//!
//! Statistical acceptance tests deciding whether a finite sequence of
//! numbers in [0, 1] is consistent with independent Uniform(0,1) draws,
//! used to certify pseudorandom number generators before they drive a
//! simulation.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! raw values → sequence (validate) ─┐
//!                                   ├→ hypothesis (4 tests) → report
//! α, n → critical (quantiles) ──────┘
//! ```
//!
//! # Tests
//!
//! - **Mean**: standardized sample mean against 0.5
//! - **Variance**: `12 (n-1) s²` against a chi-square interval
//! - **Conformity**: Kolmogorov-Smirnov distance to the uniform CDF
//! - **Independence**: peaks-and-valleys runs count
//!
//! The four tests are pure functions of an immutable sequence and share
//! no state. No correction is made for running them jointly.
//!
//! # Example
//!
//! ```
//! use prng_validation::{run, SignificanceLevel, Thresholds};
//!
//! let report = run(
//!     vec![0.12, 0.54, 0.98, 0.33, 0.77],
//!     &Thresholds::Significance(SignificanceLevel::new(0.05).unwrap()),
//! )
//! .unwrap();
//!
//! assert_eq!(report.sample_size(), 5);
//! assert_eq!(report.independence().runs(), Some(3));
//! println!("{report}");
//! ```

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod critical;
pub mod error;
pub mod generate;
pub mod hypothesis;
pub mod metrics;
pub mod report;
pub mod sequence;

// Re-export commonly used types at crate root
pub use config::{FileConfig, OutputFormat};
pub use critical::{CriticalValueProvider, CriticalValues, KsMethod, SignificanceLevel, Thresholds};
pub use error::ValidationError;
pub use generate::SampleGenerator;
pub use hypothesis::{
    ConformityTest, HypothesisTest, IndependenceTest, MeanTest, Outcome, TestKind, TestVerdict,
    VarianceTest,
};
pub use report::{run, EngineConfig, TestReport, ValidationEngine};
pub use sequence::{parse_sequence, Sequence};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
