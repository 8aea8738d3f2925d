//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the control loop
//! against mock host adapters.

mod controller_tests;
mod mock_host;
