use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::debug;
use url::Url;

use quiz_core::model::{QuestionDraft, QuestionRecord};

use crate::error::LoadError;

/// A source of quiz questions.
///
/// `load` returns the full, validated bank. The fetch is the only
/// asynchronous operation in the engine; everything downstream of a
/// successful load is synchronous.
#[async_trait]
pub trait BankSource: Send + Sync {
    /// Load the full question bank.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the bank is unreachable, malformed, or empty.
    async fn load(&self) -> Result<Vec<QuestionRecord>, LoadError>;
}

//
// ─── HTTP SOURCE ───────────────────────────────────────────────────────────────
//

/// Fetches the bank from a well-known HTTP endpoint.
///
/// Requests carry `Cache-Control: no-cache` so intermediaries revalidate and
/// the freshest bank is always served.
#[derive(Debug, Clone)]
pub struct HttpBankSource {
    client: Client,
    endpoint: Url,
}

impl HttpBankSource {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Use a preconfigured client, e.g. with timeouts set by the embedder.
    #[must_use]
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl BankSource for HttpBankSource {
    async fn load(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        debug!(endpoint = %self.endpoint, "fetching question bank");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let drafts: Vec<QuestionDraft> = serde_json::from_str(&body)?;
        let bank = validate_bank(drafts)?;

        debug!(records = bank.len(), "question bank loaded");
        Ok(bank)
    }
}

fn validate_bank(drafts: Vec<QuestionDraft>) -> Result<Vec<QuestionRecord>, LoadError> {
    let bank = drafts
        .into_iter()
        .map(QuestionDraft::validate)
        .collect::<Result<Vec<_>, _>>()?;

    if bank.is_empty() {
        return Err(LoadError::EmptyBank);
    }
    Ok(bank)
}

//
// ─── IN-MEMORY SOURCE ──────────────────────────────────────────────────────────
//

/// Serves a pre-validated bank from memory, for tests and embedded banks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBankSource {
    records: Vec<QuestionRecord>,
}

impl InMemoryBankSource {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl BankSource for InMemoryBankSource {
    async fn load(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        if self.records.is_empty() {
            return Err(LoadError::EmptyBank);
        }
        Ok(self.records.clone())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
