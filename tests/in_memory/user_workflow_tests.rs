//! In-memory integration tests driving the workflow for staff users.

use backoffice::user::{
    domain::{UserId, UserRole},
    schema::UserSchema,
};
use backoffice::workflow::{
    domain::{Capabilities, NavigationIntent},
    services::{SaveOutcome, Unavailable},
};
use rstest::rstest;
use std::sync::Arc;

use super::helpers::{UserStore, open_create, open_edit, seed_user, user_store};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn invited_user_opens_under_users_route(user_store: Arc<UserStore>) -> eyre::Result<()> {
    let session = open_create(&user_store, UserSchema::default(), Capabilities::all());
    session.workflow.set_field("name", "Ada Lovelace")?;
    session.workflow.set_field("email", " ada@example.org ")?;
    session.workflow.set_field("role", "Admin")?;

    let outcome = session.workflow.save().await;

    let SaveOutcome::Created(id) = outcome else {
        eyre::bail!("expected a created user, got {outcome:?}");
    };
    assert_eq!(id, UserId::from(1));
    let stored = user_store
        .get(&id)?
        .ok_or_else(|| eyre::eyre!("user {id} missing from store"))?;
    assert_eq!(stored.fields().email(), "ada@example.org");
    assert_eq!(stored.fields().role(), UserRole::Admin);
    assert_eq!(session.navigator.paths(), vec!["/users/1".to_owned()]);
    let titles: Vec<String> = session
        .notifier
        .notifications()
        .iter()
        .map(|notification| notification.title().to_owned())
        .collect();
    assert_eq!(titles, vec!["User created".to_owned()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn malformed_email_is_reported_on_its_field(
    user_store: Arc<UserStore>,
) -> eyre::Result<()> {
    let user = seed_user(&user_store, "Grace", "grace@example.org", UserRole::Staff)?;
    let session = open_edit(&user_store, &user, UserSchema::default(), Capabilities::all());
    session.workflow.set_field("email", "grace@localhost")?;

    let outcome = session.workflow.save().await;

    assert!(matches!(outcome, SaveOutcome::Rejected(_)), "got {outcome:?}");
    let email = session
        .workflow
        .field("email")
        .ok_or_else(|| eyre::eyre!("email field missing from form"))?;
    assert_eq!(email.error(), Some("E-mail must be a valid e-mail address"));
    let stored = user_store
        .get(user.id())?
        .ok_or_else(|| eyre::eyre!("user missing from store"))?;
    assert_eq!(stored.fields().email(), "grace@example.org");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn viewer_console_cannot_delete_users(user_store: Arc<UserStore>) -> eyre::Result<()> {
    let user = seed_user(&user_store, "Linus", "linus@example.org", UserRole::Viewer)?;
    let session = open_edit(
        &user_store,
        &user,
        UserSchema::default(),
        Capabilities::new(false, true, false),
    );

    assert!(!session.workflow.can_delete());
    assert_eq!(
        session.workflow.request_delete().err(),
        Some(Unavailable::NotPermitted)
    );
    assert_eq!(
        session.workflow.navigate_new(),
        Err(Unavailable::NotPermitted)
    );
    assert_eq!(user_store.len()?, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn back_leaves_the_store_untouched(user_store: Arc<UserStore>) -> eyre::Result<()> {
    let user = seed_user(&user_store, "Barbara", "barbara@example.org", UserRole::Staff)?;
    let session = open_edit(&user_store, &user, UserSchema::default(), Capabilities::all());
    session.workflow.set_field("name", "Unsaved edit")?;

    session.workflow.back();

    assert_eq!(session.navigator.intents(), vec![NavigationIntent::Back]);
    let stored = user_store
        .get(user.id())?
        .ok_or_else(|| eyre::eyre!("user missing from store"))?;
    assert_eq!(stored.fields().name(), "Barbara");
    Ok(())
}
