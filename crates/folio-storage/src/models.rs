// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical verification-code type is defined in `folio-core::types`
//! for use across the service seams. This module re-exports it for
//! convenience within the storage crate.

pub use folio_core::types::VerificationCode;
