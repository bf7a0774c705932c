//! Integration tests exercising the credit ledger and the quota policy
//! together, over the in-memory repositories.

use std::sync::Arc;

use chrono::{Duration, Utc};

use ch_core::domain::entities::account::{Account, Role};
use ch_core::domain::entities::conversion_rule::ConversionRule;
use ch_core::domain::entities::tailor::Tailor;
use ch_core::errors::{CreditError, DomainError, QuotaError};
use ch_core::repositories::{
    MockAccountRepository, MockConversionRuleRepository, MockPostRepository, MockTailorRepository,
};
use ch_core::services::credit::{ConversionRuleRegistry, CreditService};
use ch_core::services::post::{PostDraft, PostService, PostServiceConfig};

type Ledger = CreditService<MockAccountRepository, MockConversionRuleRepository>;
type Posts = PostService<
    MockAccountRepository,
    MockConversionRuleRepository,
    MockTailorRepository,
    MockPostRepository,
>;

struct World {
    accounts: Arc<MockAccountRepository>,
    post_store: Arc<MockPostRepository>,
    ledger: Arc<Ledger>,
    posts: Posts,
}

/// One tailleur (account 1, tailor 10), one rule: 100 credits per 5000
async fn world(balance: f64) -> World {
    let accounts = Arc::new(MockAccountRepository::new());
    accounts.insert(Account::new(1, Role::Tailleur, balance)).await;
    let tailors = Arc::new(MockTailorRepository::new());
    tailors.insert(Tailor::new(10, 1)).await;
    let post_store = Arc::new(MockPostRepository::new());

    let rules = Arc::new(MockConversionRuleRepository::new());
    rules
        .push(ConversionRule {
            id: 1,
            credit: 100.0,
            price: 5000.0,
            created_at: Utc::now() - Duration::days(1),
        })
        .await;

    let ledger = Arc::new(CreditService::new(
        Arc::clone(&accounts),
        Arc::new(ConversionRuleRegistry::new(rules)),
    ));
    let posts = PostService::new(
        Arc::clone(&accounts),
        tailors,
        Arc::clone(&post_store),
        Arc::clone(&ledger),
        PostServiceConfig::default(),
    );

    World {
        accounts,
        post_store,
        ledger,
        posts,
    }
}

fn submission() -> PostDraft {
    PostDraft {
        title: "Costume trois pièces".to_string(),
        content: "Laine froide, doublure satin".to_string(),
        files: Some("uploads/costume.png".to_string()),
        categorie: Some("ceremonie".to_string()),
        state: None,
        use_credit: false,
    }
}

#[tokio::test]
async fn test_month_of_posting_against_a_purchased_balance() {
    let w = world(0.0).await;

    // Purchase converts through the rule in force: 5000 currency -> 100 credits
    let purchase = w.ledger.purchase(1, 5000.0).await.unwrap();
    assert_eq!(purchase.account.credit, 100.0);

    // First post of the month rides the quota
    let first = w.posts.create_post(1, submission()).await.unwrap();
    assert!(first.is_free());
    assert_eq!(w.accounts.balance_of(1).await, Some(100.0));

    // Every further post costs 2 units
    let second = w.posts.create_post(1, submission()).await.unwrap();
    assert!(!second.is_free());
    assert_eq!(w.accounts.balance_of(1).await, Some(98.0));

    assert_eq!(w.post_store.len().await, 2);
}

#[tokio::test]
async fn test_exhausted_balance_rejects_the_over_quota_post() {
    let w = world(3.0).await;

    w.posts.create_post(1, submission()).await.unwrap(); // free
    w.posts.create_post(1, submission()).await.unwrap(); // paid, balance 1.0

    let third = w.posts.create_post(1, submission()).await;
    assert!(matches!(
        third,
        Err(DomainError::Quota(
            QuotaError::QuotaExceededAndInsufficientCredit { .. }
        ))
    ));
    assert_eq!(w.post_store.len().await, 2);
    assert_eq!(w.accounts.balance_of(1).await, Some(1.0));
}

#[tokio::test]
async fn test_two_concurrent_debits_for_the_last_units() {
    let w = world(2.0).await;

    let (first, second) = tokio::join!(w.ledger.debit(1, 2), w.ledger.debit(1, 2));

    // Exactly one wins, the other observes the shortfall, the balance lands on 0
    assert_eq!(
        [&first, &second].iter().filter(|r| r.is_ok()).count(),
        1
    );
    assert!([&first, &second].iter().any(|r| matches!(
        r,
        Err(DomainError::Credit(CreditError::InsufficientCredit { .. }))
    )));
    assert_eq!(w.accounts.balance_of(1).await, Some(0.0));
}

#[tokio::test]
async fn test_balance_never_goes_negative_over_a_call_sequence() {
    let w = world(5.0).await;

    assert_eq!(w.ledger.debit(1, 2).await.unwrap(), 3.0);
    assert_eq!(w.ledger.debit(1, 2).await.unwrap(), 1.0);
    assert!(w.ledger.debit(1, 2).await.is_err());
    assert_eq!(w.accounts.balance_of(1).await, Some(1.0));

    w.ledger.purchase(1, 50.0).await.unwrap(); // +1 credit
    assert_eq!(w.ledger.debit(1, 2).await.unwrap(), 0.0);
    assert!(w.ledger.debit(1, 2).await.is_err());
    assert_eq!(w.accounts.balance_of(1).await, Some(0.0));
}

#[tokio::test]
async fn test_rejected_submission_changes_nothing_for_any_balance() {
    for balance in [0.0, 10.0] {
        let w = world(balance).await;

        let missing_title = PostDraft {
            title: String::new(),
            ..submission()
        };
        assert!(w.posts.create_post(1, missing_title).await.is_err());

        assert_eq!(w.accounts.balance_of(1).await, Some(balance));
        assert!(w.post_store.is_empty().await);
    }
}
