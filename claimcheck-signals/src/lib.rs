// claimcheck-signals/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod keywords;
pub mod scoring;
pub mod statistics;
