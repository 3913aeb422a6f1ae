//! Reporting chip identification on the console at boot
//!
//! The bootinfo crate is the portable part of a small demonstration
//! firmware: at power-on it greets, describes the chip it finds itself
//! running on (core count, radio capabilities, silicon revision, flash
//! size, heap low-water mark), counts down for ten seconds, and asks
//! the platform to restart.
//!
//! Everything observable lives in this crate, behind trait seams --
//! [`Platform`] for the chip-level queries, [`Console`] for text
//! output, and `embedded_hal`'s `DelayNs` for the countdown -- so the
//! whole routine runs and is tested on the host against mocks. The
//! per-target glue (and the keep-alive tail that waits for the restart
//! to land) lives in the firmware crates under `cross/`.
//!
//! The console text is the program's only protocol surface, and
//! downstream tooling scrapes it, so [`report`] treats the exact line
//! text as a compatibility contract.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod console;
pub use console::Console;
pub mod platform;
pub use platform::{ChipInfo, Features, Platform};
pub mod report;
pub use report::report;
