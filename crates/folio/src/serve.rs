// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup wiring: storage, senders, providers, and the axum server.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use folio_config::FolioConfig;
use folio_core::{CodeSender, CodeStore, FolioError, IdentityDirectory};
use folio_gateway::{compose_system_prompt, load_book_content, start_server, AppState};
use folio_providers::ProviderRouter;
use folio_verify::{ConsoleSender, HttpIdentityDirectory, SmtpSender, VerificationService};

/// Build every collaborator from config and serve until stopped.
pub async fn run(config: FolioConfig) -> Result<(), FolioError> {
    let store = Arc::new(folio_storage::SqliteCodeStore::open(&config.storage).await?);
    let store_dyn: Arc<dyn CodeStore> = Arc::clone(&store) as Arc<dyn CodeStore>;

    let sender: Arc<dyn CodeSender> = match config.verify.sender.as_str() {
        "smtp" => Arc::new(SmtpSender::from_config(
            &config.smtp,
            config.verify.code_ttl_minutes,
        )?),
        _ => {
            info!("using console code sender (development mode)");
            Arc::new(ConsoleSender)
        }
    };

    let directory: Option<Arc<dyn IdentityDirectory>> = match &config.identity.base_url {
        Some(base_url) => Some(Arc::new(HttpIdentityDirectory::new(
            base_url,
            config.identity.service_key.as_deref(),
        )?)),
        None => {
            info!("identity directory disabled (identity.base_url unset)");
            None
        }
    };

    let verify = Arc::new(VerificationService::new(
        Arc::clone(&store_dyn),
        sender,
        directory,
        config.verify.code_ttl_minutes,
    ));

    let completer = Arc::new(ProviderRouter::from_config(&config.providers)?);

    let book = load_book_content(Path::new(&config.agent.book_content_file));
    let system_prompt: Arc<str> = Arc::from(compose_system_prompt(&book));

    let state = AppState {
        completer,
        verify,
        store: store_dyn,
        system_prompt,
        started: Instant::now(),
    };

    start_server(&config.server, state).await
}
