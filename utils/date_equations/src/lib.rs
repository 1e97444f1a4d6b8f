//! # Date Equations
//!
//! Date Equations is a library focused on implementing
//! small, highly performant calendar calculations. The Gregorian
//! implementation is informed by the work done by Cassio Neri and
//! Lorenz Schneider on applying Euclidean affine functions to
//! calendar algorithms. The Hebrew implementation covers the
//! arithmetic half of the fixed Hebrew calendar: the molad month
//! count and the 19 year leap cycle.
//!
//! ``` rust
//! use date_equations::{gregorian, hebrew};
//!
//! let date = gregorian::ymd_from_epoch_days(0);
//! assert_eq!(date, (1970, 1, 1));
//!
//! assert!(hebrew::is_leap_year(5765));
//! assert_eq!(hebrew::months_since_epoch_molad(5765), 71291);
//! ```
#![no_std]

pub mod gregorian;
pub mod hebrew;
