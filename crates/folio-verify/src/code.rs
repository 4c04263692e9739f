// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verification-code generation.

use rand::Rng;

/// Smallest issuable code. Six digits, so no leading zeros.
pub const CODE_MIN: u32 = 100_000;

/// Largest issuable code.
pub const CODE_MAX: u32 = 999_999;

/// Draw a fresh 6-digit code, uniform over [`CODE_MIN`, `CODE_MAX`].
pub fn generate_code() -> String {
    rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX).to_string()
}
