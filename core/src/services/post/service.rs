//! Post service: quota-enforced creation, ownership-checked edits.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::domain::entities::post::{NewPost, Post, PostEdit, FREE_POST_COUNT};
use crate::domain::entities::tailor::Tailor;
use crate::domain::value_objects::PostAdmission;
use crate::errors::{CreditError, DomainError, DomainResult, QuotaError, ValidationError};
use crate::repositories::{
    AccountRepository, ConversionRuleRepository, PostRepository, TailorRepository,
};
use crate::services::credit::CreditService;
use ch_shared::validation::{not_empty, valid_media_reference};

use super::config::PostServiceConfig;
use super::quota::month_window;

/// A post submission as received from the request layer
///
/// `files` is the reference to the already-uploaded media; the upload itself
/// happened before the request reached the core.
#[derive(Debug, Clone)]
pub struct PostDraft {
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Uploaded media reference, if any was attached
    pub files: Option<String>,
    /// Optional category label
    pub categorie: Option<String>,
    /// Publication state ("draft" when absent)
    pub state: Option<String>,
    /// Caller opts to spend credit even with quota available
    pub use_credit: bool,
}

/// Post service enforcing the monthly quota policy
///
/// Stateless per request: the quota state is recomputed from the post history
/// on every call, there is no persistent counter to drift. The quota check and
/// the subsequent insert are two separate steps, so two concurrent
/// first-of-month submissions by the same tailor can both be admitted free.
/// That narrow race is accepted behavior, inherited from the product policy.
pub struct PostService<A, C, T, P>
where
    A: AccountRepository,
    C: ConversionRuleRepository,
    T: TailorRepository,
    P: PostRepository,
{
    /// Account store, for the existence precondition
    accounts: Arc<A>,
    /// Tailor profile lookups
    tailors: Arc<T>,
    /// Post store and history
    posts: Arc<P>,
    /// The credit ledger; the only path to the balance
    ledger: Arc<CreditService<A, C>>,
    /// Quota policy configuration
    config: PostServiceConfig,
}

impl<A, C, T, P> PostService<A, C, T, P>
where
    A: AccountRepository,
    C: ConversionRuleRepository,
    T: TailorRepository,
    P: PostRepository,
{
    /// Create a new post service
    pub fn new(
        accounts: Arc<A>,
        tailors: Arc<T>,
        posts: Arc<P>,
        ledger: Arc<CreditService<A, C>>,
        config: PostServiceConfig,
    ) -> Self {
        Self {
            accounts,
            tailors,
            posts,
            ledger,
            config,
        }
    }

    /// Submit a new post through the admission policy
    ///
    /// This method:
    /// 1. Validates the structural preconditions (title, content, media)
    /// 2. Resolves the account and its tailor profile
    /// 3. Counts the free posts already created this calendar month
    /// 4. Admits free when the quota is untouched and the caller did not opt
    ///    into credit; otherwise debits the fixed paid-post cost and admits
    ///    against credit
    ///
    /// A submission that fails validation is rejected before any ledger
    /// interaction. A debit with no covering balance rejects the submission
    /// with `QuotaExceededAndInsufficientCredit` and leaves no trace.
    pub async fn create_post(
        &self,
        compte_id: i64,
        draft: PostDraft,
    ) -> DomainResult<PostAdmission> {
        // Structural preconditions, independent of credit
        let files = validate_draft(&draft)?;

        let account = self
            .accounts
            .find_by_id(compte_id)
            .await?
            .ok_or_else(|| DomainError::not_found("compte"))?;
        let tailor = self.find_tailor(compte_id).await?;

        let window = month_window(Utc::now());
        let free_used = self
            .posts
            .count_free_in_window(tailor.id, window.start, window.end)
            .await?;

        if free_used < self.config.free_posts_per_month && !draft.use_credit {
            let post = self
                .posts
                .create(new_post(tailor.id, &draft, files, FREE_POST_COUNT))
                .await?;
            info!(tailleur_id = tailor.id, post_id = post.id, "post admitted on quota");
            return Ok(PostAdmission::Free { post });
        }

        // Quota used this month, or the caller opted into credit
        let cost = self.config.paid_post_cost;
        let remaining = match self.ledger.debit(account.id, cost).await {
            Ok(balance) => balance,
            Err(DomainError::Credit(CreditError::InsufficientCredit { balance, .. })) => {
                return Err(QuotaError::QuotaExceededAndInsufficientCredit {
                    balance,
                    required: cost,
                }
                .into());
            }
            Err(other) => return Err(other),
        };

        match self
            .posts
            .create(new_post(tailor.id, &draft, files, cost))
            .await
        {
            Ok(post) => {
                info!(
                    tailleur_id = tailor.id,
                    post_id = post.id,
                    remaining_credit = remaining,
                    "post admitted against credit"
                );
                Ok(PostAdmission::Paid {
                    post,
                    remaining_credit: remaining,
                })
            }
            Err(create_err) => {
                // The debit must not outlive a failed insert
                if let Err(refund_err) = self.ledger.refund(account.id, cost).await {
                    error!(
                        compte_id,
                        %refund_err,
                        "refund after failed post insert also failed"
                    );
                }
                Err(create_err)
            }
        }
    }

    /// Apply a partial edit to an owned post
    ///
    /// Posts belong to the tailor that created them; editing a post of
    /// another tailor is indistinguishable from editing a missing one.
    pub async fn update_post(
        &self,
        compte_id: i64,
        post_id: i64,
        edit: PostEdit,
    ) -> DomainResult<Post> {
        let tailor = self.find_tailor(compte_id).await?;
        let mut post = self.find_owned_post(&tailor, post_id).await?;

        post.apply_edit(edit);
        self.posts.update(post).await
    }

    /// Delete an owned post
    pub async fn delete_post(&self, compte_id: i64, post_id: i64) -> DomainResult<()> {
        let tailor = self.find_tailor(compte_id).await?;
        let post = self.find_owned_post(&tailor, post_id).await?;

        if !self.posts.delete(post.id).await? {
            return Err(DomainError::not_found("post"));
        }
        info!(tailleur_id = tailor.id, post_id, "post deleted");
        Ok(())
    }

    async fn find_tailor(&self, compte_id: i64) -> DomainResult<Tailor> {
        self.tailors
            .find_by_compte_id(compte_id)
            .await?
            .ok_or_else(|| DomainError::not_found("tailleur"))
    }

    async fn find_owned_post(&self, tailor: &Tailor, post_id: i64) -> DomainResult<Post> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .filter(|p| p.tailleur_id == tailor.id)
            .ok_or_else(|| DomainError::not_found("post"))?;
        Ok(post)
    }
}

fn validate_draft(draft: &PostDraft) -> Result<String, ValidationError> {
    if !not_empty(&draft.title) {
        return Err(ValidationError::EmptyText {
            field: "title".to_string(),
        });
    }
    if !not_empty(&draft.content) {
        return Err(ValidationError::EmptyText {
            field: "content".to_string(),
        });
    }
    let files = draft
        .files
        .as_deref()
        .ok_or_else(|| ValidationError::RequiredField {
            field: "files".to_string(),
        })?;
    if !valid_media_reference(files) {
        return Err(ValidationError::InvalidMediaReference {
            reference: files.to_string(),
        });
    }
    Ok(files.to_string())
}

fn new_post(tailleur_id: i64, draft: &PostDraft, files: String, count: u32) -> NewPost {
    NewPost {
        tailleur_id,
        title: draft.title.clone(),
        content: draft.content.clone(),
        files,
        count,
        categorie: draft.categorie.clone(),
        state: draft
            .state
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "draft".to_string()),
    }
}
