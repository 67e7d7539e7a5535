//! Link creation, redirect and management service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, RepositoryError};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};
use crate::utils::validation::{is_valid_code, is_valid_url};

/// Total number of generated candidates tried before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Source of candidate codes for links created without an explicit code.
pub type CodeGenerator = fn() -> String;

/// Service for creating, resolving and deleting short links.
///
/// Holds no state between calls beyond the injected repository; every
/// consistency guarantee comes from the store's own transactions.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    code_generator: CodeGenerator,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service using the random code generator.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_code_generator(link_repository, generate_code)
    }

    /// Creates a link service with a custom candidate code source.
    pub fn with_code_generator(link_repository: Arc<L>, code_generator: CodeGenerator) -> Self {
        Self {
            link_repository,
            code_generator,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - Absolute `http`/`https` URL to redirect to
    /// - `code` - Optional explicit short code; an empty string counts as absent
    ///
    /// # Code Allocation
    ///
    /// - An explicit code is validated and inserted once. If it is taken the
    ///   call fails; it never falls back to a generated code.
    /// - Otherwise up to [`MAX_GENERATION_ATTEMPTS`] random candidates are
    ///   inserted in turn, each collision retried with a fresh candidate.
    ///
    /// Uniqueness is decided by the store's insert alone, never by a prior read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] or [`AppError::InvalidCode`] before
    /// any write. Returns [`AppError::CodeExists`] if the explicit code is
    /// taken and [`AppError::GenerationExhausted`] if every candidate collided.
    pub async fn create_link(
        &self,
        target_url: &str,
        code: Option<&str>,
    ) -> Result<Link, AppError> {
        if !is_valid_url(target_url) {
            return Err(AppError::InvalidUrl);
        }

        let link = match code.filter(|c| !c.is_empty()) {
            Some(code) => self.create_with_code(target_url, code).await?,
            None => self.create_with_generated_code(target_url).await?,
        };

        tracing::info!(code = %link.code, target_url = %link.target_url, "Link created");

        Ok(link)
    }

    async fn create_with_code(&self, target_url: &str, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) || is_reserved(code) {
            return Err(AppError::InvalidCode);
        }

        let link = self
            .link_repository
            .create(NewLink::new(code, target_url))
            .await?;

        Ok(link)
    }

    async fn create_with_generated_code(&self, target_url: &str) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = (self.code_generator)();

            if is_reserved(&code) {
                tracing::debug!(attempt, %code, "Generated reserved code, retrying");
                continue;
            }

            match self
                .link_repository
                .create(NewLink::new(code.as_str(), target_url))
                .await
            {
                Ok(link) => return Ok(link),
                Err(RepositoryError::AlreadyExists) => {
                    tracing::debug!(attempt, %code, "Generated code collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Failed to generate a unique code"
        );

        Err(AppError::GenerationExhausted)
    }

    /// Resolves a code to its target URL and records the click.
    ///
    /// The increment and the existence check are one store operation, so a
    /// concurrent delete either wins (this call fails) or loses (the click is
    /// counted before the record disappears).
    ///
    /// # Errors
    ///
    /// Always returns [`AppError::NotFound`] on failure. Storage errors are
    /// logged and hidden from the anonymous visitor.
    pub async fn redirect(&self, code: &str) -> Result<String, AppError> {
        match self.link_repository.increment_clicks(code).await {
            Ok(link) => Ok(link.target_url),
            Err(RepositoryError::NotFound) => Err(AppError::NotFound),
            Err(e) => {
                tracing::error!(error = %e, %code, "Redirect failed");
                Err(AppError::NotFound)
            }
        }
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.link_repository.list_all().await?)
    }

    /// Permanently deletes a link. The code never resolves again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        self.link_repository.delete(code).await?;

        tracing::info!(%code, "Link deleted");

        Ok(())
    }

    /// Returns true if the backing store answers.
    pub async fn is_healthy(&self) -> bool {
        match self.link_repository.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Store health check failed");
                false
            }
        }
    }
}
