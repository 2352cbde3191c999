//! Link creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::context::RequestContext;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// Service for creating and resolving shortened links.
///
/// Codes are taken from the generator as-is. The store is not consulted
/// before writing, so a colliding code overwrites the earlier mapping.
pub struct LinkService<L: LinkRepository, G: CodeGenerator = RandomCodeGenerator> {
    link_repository: Arc<L>,
    generator: Arc<G>,
    base_url: String,
}

impl<L: LinkRepository, G: CodeGenerator> LinkService<L, G> {
    /// Creates a new link service.
    ///
    /// `base_url` prefixes every short URL, e.g. `http://localhost:8080`.
    pub fn new(link_repository: Arc<L>, generator: Arc<G>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            generator,
            base_url: base_url.into(),
        }
    }

    /// Creates a short link for `long_url` under a freshly generated code.
    ///
    /// `long_url` is stored verbatim; request validation rejects empty URLs
    /// before they get here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if `ctx` is done before the write.
    pub async fn shorten(&self, ctx: &RequestContext, long_url: String) -> Result<Link, AppError> {
        let code = self.generator.generate();
        self.link_repository.set(ctx, &code, &long_url).await?;

        info!(code = %code, "Shortened URL");
        Ok(Link::new(code, long_url))
    }

    /// Resolves a short code to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `code` is empty or not stored.
    ///
    /// Returns [`AppError::Internal`] if `ctx` is done before the lookup.
    pub async fn resolve(&self, ctx: &RequestContext, code: &str) -> Result<Link, AppError> {
        if code.is_empty() {
            warn!("Empty code provided in request");
            return Err(AppError::not_found("Short link not found", json!({})));
        }

        match self.link_repository.get(ctx, code).await? {
            Some(long_url) => Ok(Link::new(code, long_url)),
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            )),
        }
    }

    /// Constructs the public short URL for a link.
    pub fn short_url(&self, link: &Link) -> String {
        link.short_url(&self.base_url)
    }

    /// Number of links currently stored.
    pub async fn link_count(&self) -> usize {
        self.link_repository.count().await
    }
}
