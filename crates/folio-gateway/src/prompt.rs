// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The synthesized system instruction.
//!
//! Every upstream request starts with exactly one system turn built here:
//! the guardrail template with the book corpus spliced in. The corpus is
//! read once at startup; a missing file degrades to an empty corpus
//! section with the guardrails still in force.

use std::path::Path;

use tracing::warn;

/// Compose the full system instruction around the book corpus.
pub fn compose_system_prompt(book_content: &str) -> String {
    format!(
        r#"You are a specialized AI Assistant for the "Physical AI & Humanoid Robotics" book.
Your knowledge is STRICTLY limited to the content provided below.

---
BOOK CONTENT:
{book_content}
---

GUARDRAILS:
1. You must ONLY answer questions related to the book content provided above.
2. If a user asks about a topic not covered in the book (e.g., general knowledge, politics, other books), you must politely refuse and state that you can only answer questions about "Physical AI & Humanoid Robotics".
3. Do not hallucinate information. If the answer is not in the book, say "I cannot find that information in the book."
4. Be helpful, concise, and professional.
5. You can answer in Roman Urdu if the user asks in Roman Urdu, but keep technical terms in English."#
    )
}

/// Read the book corpus from disk.
///
/// A missing or unreadable file is logged and yields an empty corpus so
/// the service still starts (the assistant will then refuse everything,
/// which is the safe direction).
pub fn load_book_content(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "book corpus not readable; using empty corpus");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_corpus_between_markers() {
        let prompt = compose_system_prompt("Chapter 1: Actuators.");
        assert!(prompt.contains("BOOK CONTENT:\nChapter 1: Actuators.\n---"));
        assert!(prompt.contains("GUARDRAILS:"));
        assert!(prompt.contains("Roman Urdu"));
        assert!(prompt.contains("I cannot find that information in the book."));
    }

    #[test]
    fn missing_corpus_file_degrades_to_empty() {
        let content = load_book_content(Path::new("/definitely/not/here/BOOK_CONTENT.md"));
        assert!(content.is_empty());

        let prompt = compose_system_prompt(&content);
        assert!(prompt.contains("BOOK CONTENT:\n\n---"));
    }

    #[test]
    fn existing_corpus_file_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("BOOK_CONTENT.md");
        std::fs::write(&path, "# Physical AI\n\nRobots move.\n").unwrap();

        let content = load_book_content(&path);
        assert_eq!(content, "# Physical AI\n\nRobots move.\n");
    }
}
