// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser runtime.
//!
//! Everything that touches `web_sys` lives here, behind the `wasm` feature.
//! The controller and search code never see the DOM; they talk to the
//! adapters defined in `wasm`.

pub mod console;
pub mod wasm;
