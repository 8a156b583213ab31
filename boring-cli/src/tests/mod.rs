//! Shared test harness modules for the `boring` CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod assess_steps;
mod helpers;
