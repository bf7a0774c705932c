//! Unit tests for the post quota policy

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::account::{Account, Role};
use crate::domain::entities::conversion_rule::ConversionRule;
use crate::domain::entities::post::PostEdit;
use crate::domain::entities::tailor::Tailor;
use crate::domain::value_objects::PostAdmission;
use crate::errors::{DomainError, QuotaError, ValidationError};
use crate::repositories::{
    MockAccountRepository, MockConversionRuleRepository, MockPostRepository, MockTailorRepository,
    PostRepository,
};
use crate::services::credit::{ConversionRuleRegistry, CreditService};
use crate::services::post::{PostDraft, PostService, PostServiceConfig};

use super::mocks::FailingPostRepository;

struct Fixture {
    accounts: Arc<MockAccountRepository>,
    posts: Arc<MockPostRepository>,
    service: PostService<
        MockAccountRepository,
        MockConversionRuleRepository,
        MockTailorRepository,
        MockPostRepository,
    >,
}

/// Account 1 is a tailleur with tailor profile 10 and the given balance
async fn fixture(balance: f64) -> Fixture {
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.insert(Account::new(1, Role::Tailleur, balance)).await;
    let tailors = Arc::new(MockTailorRepository::new());
    tailors.insert(Tailor::new(10, 1)).await;
    let posts = Arc::new(MockPostRepository::new());
    let rules = Arc::new(MockConversionRuleRepository::new());
    rules
        .push(ConversionRule {
            id: 1,
            credit: 100.0,
            price: 5000.0,
            created_at: Utc::now(),
        })
        .await;

    let ledger = Arc::new(CreditService::new(
        Arc::clone(&accounts),
        Arc::new(ConversionRuleRegistry::new(rules)),
    ));
    let service = PostService::new(
        Arc::clone(&accounts),
        tailors,
        Arc::clone(&posts),
        ledger,
        PostServiceConfig::default(),
    );

    Fixture {
        accounts,
        posts,
        service,
    }
}

fn draft() -> PostDraft {
    PostDraft {
        title: "Boubou brodé".to_string(),
        content: "Broderie main, tissu bazin".to_string(),
        files: Some("uploads/boubou.png".to_string()),
        categorie: None,
        state: None,
        use_credit: false,
    }
}

#[tokio::test]
async fn test_first_post_of_the_month_is_free() {
    let fx = fixture(5.0).await;

    let admission = fx.service.create_post(1, draft()).await.unwrap();

    assert!(admission.is_free());
    assert_eq!(admission.post().count, 0);
    // No ledger interaction for a quota post
    assert_eq!(fx.accounts.balance_of(1).await, Some(5.0));
    assert_eq!(fx.posts.len().await, 1);
}

#[tokio::test]
async fn test_second_post_is_charged_two_units() {
    let fx = fixture(5.0).await;
    fx.service.create_post(1, draft()).await.unwrap();

    let admission = fx.service.create_post(1, draft()).await.unwrap();

    match admission {
        PostAdmission::Paid {
            post,
            remaining_credit,
        } => {
            assert_eq!(post.count, 2);
            assert_eq!(remaining_credit, 3.0);
        }
        PostAdmission::Free { .. } => panic!("second post must be charged"),
    }
    assert_eq!(fx.accounts.balance_of(1).await, Some(3.0));
    assert_eq!(fx.posts.len().await, 2);
}

#[tokio::test]
async fn test_second_post_rejected_when_credit_short() {
    let fx = fixture(1.0).await;
    fx.service.create_post(1, draft()).await.unwrap();

    let result = fx.service.create_post(1, draft()).await;

    assert!(matches!(
        result,
        Err(DomainError::Quota(
            QuotaError::QuotaExceededAndInsufficientCredit {
                balance,
                required: 2,
            }
        )) if balance == 1.0
    ));
    // Rejection leaves no trace
    assert_eq!(fx.accounts.balance_of(1).await, Some(1.0));
    assert_eq!(fx.posts.len().await, 1);
}

#[tokio::test]
async fn test_use_credit_opts_out_of_the_free_quota() {
    let fx = fixture(5.0).await;

    let admission = fx
        .service
        .create_post(
            1,
            PostDraft {
                use_credit: true,
                ..draft()
            },
        )
        .await
        .unwrap();

    assert!(!admission.is_free());
    assert_eq!(admission.post().count, 2);
    assert_eq!(fx.accounts.balance_of(1).await, Some(3.0));
}

#[tokio::test]
async fn test_missing_title_rejected_before_any_ledger_call() {
    // Same rejection whether or not the balance could cover a paid post
    for balance in [0.0, 5.0] {
        let fx = fixture(balance).await;

        let result = fx
            .service
            .create_post(
                1,
                PostDraft {
                    title: "  ".to_string(),
                    ..draft()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::EmptyText { .. }))
        ));
        assert_eq!(fx.accounts.balance_of(1).await, Some(balance));
        assert!(fx.posts.is_empty().await);
    }
}

#[tokio::test]
async fn test_missing_file_is_rejected() {
    let fx = fixture(5.0).await;

    let result = fx
        .service
        .create_post(
            1,
            PostDraft {
                files: None,
                ..draft()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::RequiredField { .. }))
    ));
    assert!(fx.posts.is_empty().await);
}

#[tokio::test]
async fn test_unknown_account_is_not_found() {
    let fx = fixture(5.0).await;

    let result = fx.service.create_post(99, draft()).await;
    assert!(matches!(
        result,
        Err(DomainError::NotFound { resource }) if resource == "compte"
    ));
}

#[tokio::test]
async fn test_account_without_tailor_profile_is_not_found() {
    let fx = fixture(5.0).await;
    fx.accounts.insert(Account::new(2, Role::Tailleur, 5.0)).await;

    let result = fx.service.create_post(2, draft()).await;
    assert!(matches!(
        result,
        Err(DomainError::NotFound { resource }) if resource == "tailleur"
    ));
}

#[tokio::test]
async fn test_update_edits_own_post() {
    let fx = fixture(5.0).await;
    let created = fx.service.create_post(1, draft()).await.unwrap();

    let updated = fx
        .service
        .update_post(
            1,
            created.post().id,
            PostEdit {
                title: Some("Boubou grand modèle".to_string()),
                content: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Boubou grand modèle");
    assert_eq!(updated.content, created.post().content);
    assert_eq!(updated.count, created.post().count);
}

#[tokio::test]
async fn test_update_foreign_post_is_not_found() {
    let fx = fixture(5.0).await;
    let created = fx.service.create_post(1, draft()).await.unwrap();

    // A second tailleur tries to edit the first one's post
    fx.accounts.insert(Account::new(2, Role::Tailleur, 0.0)).await;
    let tailors = Arc::new(MockTailorRepository::new());
    tailors.insert(Tailor::new(20, 2)).await;
    let rules = Arc::new(MockConversionRuleRepository::new());
    let intruder = PostService::new(
        Arc::clone(&fx.accounts),
        tailors,
        Arc::clone(&fx.posts),
        Arc::new(CreditService::new(
            Arc::clone(&fx.accounts),
            Arc::new(ConversionRuleRegistry::new(rules)),
        )),
        PostServiceConfig::default(),
    );

    let result = intruder
        .update_post(2, created.post().id, PostEdit::default())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::NotFound { resource }) if resource == "post"
    ));
}

#[tokio::test]
async fn test_delete_removes_own_post() {
    let fx = fixture(5.0).await;
    let created = fx.service.create_post(1, draft()).await.unwrap();

    fx.service.delete_post(1, created.post().id).await.unwrap();
    assert!(fx.posts.is_empty().await);
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let fx = fixture(5.0).await;

    let result = fx.service.delete_post(1, 404).await;
    assert!(matches!(
        result,
        Err(DomainError::NotFound { resource }) if resource == "post"
    ));
}

#[tokio::test]
async fn test_failed_insert_refunds_the_debit() {
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.insert(Account::new(1, Role::Tailleur, 5.0)).await;
    let tailors = Arc::new(MockTailorRepository::new());
    tailors.insert(Tailor::new(10, 1)).await;
    let rules = Arc::new(MockConversionRuleRepository::new());
    let posts = Arc::new(FailingPostRepository);

    let service = PostService::new(
        Arc::clone(&accounts),
        tailors,
        Arc::clone(&posts),
        Arc::new(CreditService::new(
            Arc::clone(&accounts),
            Arc::new(ConversionRuleRegistry::new(rules)),
        )),
        PostServiceConfig::default(),
    );

    let result = service.create_post(1, draft()).await;

    assert!(matches!(result, Err(DomainError::Database { .. })));
    // The debit was compensated: no money lost, no post written
    assert_eq!(accounts.balance_of(1).await, Some(5.0));
    assert!(posts.find_by_id(1).await.unwrap().is_none());
}
