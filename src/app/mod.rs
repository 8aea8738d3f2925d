//! Application core — pure control-loop logic, zero host I/O.
//!
//! This module contains the composition root for the autohelm control
//! loop: activation handling, command wiring, configuration lifecycle, and
//! status routing. All interaction with the host happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable with
//! mock adapters.

pub mod activation;
pub mod ports;
pub mod service;
