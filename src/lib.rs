#![warn(clippy::pedantic)]
#![allow(clippy::ptr_as_ptr)]

pub mod bar_load;
pub mod bridge;
pub mod plate;
pub mod rounding_mode;
pub mod setup;
pub mod setup_error;
pub mod unit;
pub mod units;
