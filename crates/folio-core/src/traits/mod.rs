// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the Folio services and their collaborators.

pub mod completion;
pub mod delivery;
pub mod identity;
pub mod store;

pub use completion::ChatCompleter;
pub use delivery::CodeSender;
pub use identity::IdentityDirectory;
pub use store::CodeStore;
