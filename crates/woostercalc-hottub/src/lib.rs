//! woostercalc hot tub domain
//!
//! Models hot tubs and their water chemistry.
//!
//! The crate provides:
//! - Tubs with a validated water volume and a preset catalogue
//! - Value ranges with a nominal target, and classification of readings
//! - Recommended chemistry targets (pH, hardness, alkalinity, sanitizer)
//! - Measurement sets that assess each reading against its target
//!
//! # Examples
//!
//! ```
//! use woostercalc_common::Quantity;
//! use woostercalc_hottub::{chemistry_targets, HotTub, Measurements, RangeStatus};
//!
//! let readings = Measurements::builder(HotTub::salu_spa().unwrap())
//!     .ph(Quantity::unitless(7.0))
//!     .total_hardness(Quantity::unitless(200.0))
//!     .build()
//!     .unwrap();
//!
//! let report = readings.assess(&chemistry_targets().unwrap()).unwrap();
//! assert_eq!(report[0].status, RangeStatus::Low);
//! ```

#![warn(missing_docs)]

mod chemistry;
mod error;
mod measurements;
mod range;
mod tub;

pub use chemistry::{chemistry_targets, reading, target_for, Parameter};
pub use error::{HotTubError, Result};
pub use measurements::{Assessment, Measurements, MeasurementsBuilder};
pub use range::{RangeStatus, ValueRange};
pub use tub::{tub_catalog, volume_field, HotTub, SALU_SPA};
