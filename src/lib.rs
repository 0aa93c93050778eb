#![doc = include_str!("../README.md")]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{CorrelationError, InputShape, InvalidValue, Quantity, Result};

mod config;
pub use config::{CorrelationConfig, DEFAULT_PRECISION, Strategy};

mod numeric;
pub use numeric::{BigNumeric, Numeric, Primitive, ToBigFloat, normalize, normalize_any};

mod machine_precision;
pub use machine_precision::pearson_two_pass;

mod arbitrary_precision;

mod pearson;

mod correlation;
pub use correlation::{
    CorrelationKind, Correlator, correlate, correlate_any, correlate_big, correlate_mixed,
};

/// Reference bivariate samples with published correlation behaviour
pub mod datasets;
