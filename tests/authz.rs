//! Authorization boundary tests.
//!
//! Every protected operation must redirect an anonymous caller to the login
//! surface, and the one ownership check (profile updates) must hold.
//!
//! Run with: `cargo test --test authz`

#![cfg(feature = "mocks")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use lectern::actions::ProfileUpdate;
use lectern::crypto::Argon2Hasher;
use lectern::render::MockRenderer;
use lectern::{
    authorize, Decision, DenyReason, Identity, InMemorySessionRepository, MockTalkRepository,
    MockUserRepository, Orchestrator, Outcome, ProtectedAction, RequestContext, Route,
    SessionConfig, SessionManager, TalkDraft, TalkRepository, UserRepository,
};

type TestOrchestrator = Orchestrator<
    MockUserRepository,
    MockTalkRepository,
    InMemorySessionRepository,
    Argon2Hasher,
    MockRenderer,
>;

fn orchestrator() -> (TestOrchestrator, MockUserRepository, MockTalkRepository) {
    let users = MockUserRepository::new();
    let talks = MockTalkRepository::new();
    let sessions = SessionManager::new(InMemorySessionRepository::new(), SessionConfig::default());
    let orchestrator = Orchestrator::new(
        users.clone(),
        talks.clone(),
        sessions,
        Argon2Hasher::default(),
        MockRenderer,
    );
    (orchestrator, users, talks)
}

async fn login_as(orchestrator: &TestOrchestrator, username: &str) -> RequestContext {
    orchestrator
        .register(username, "securepassword")
        .await
        .unwrap();
    let redirect = orchestrator
        .login(username, "securepassword")
        .await
        .unwrap();
    RequestContext::with_token(redirect.session_token.unwrap())
}

// =============================================================================
// Anonymous callers
// =============================================================================

#[tokio::test]
async fn anonymous_page_requests_redirect_to_login() {
    let (orchestrator, _, _) = orchestrator();
    let ctx = RequestContext::anonymous();

    assert_eq!(
        orchestrator.home(&ctx).await.unwrap(),
        Outcome::Redirect(Route::Login)
    );
    assert_eq!(
        orchestrator.list_talks(&ctx).await.unwrap(),
        Outcome::Redirect(Route::Login)
    );
    assert_eq!(
        orchestrator.profile(&ctx).await.unwrap(),
        Outcome::Redirect(Route::Login)
    );
}

#[tokio::test]
async fn anonymous_mutations_redirect_to_login() {
    let (orchestrator, _, talks) = orchestrator();
    let seeded = talks
        .create_talk(TalkDraft::mock("Talk A"), "alice", 1)
        .await
        .unwrap();
    let ctx = RequestContext::anonymous();

    let route = orchestrator
        .create_talk(&ctx, TalkDraft::mock("Talk B"))
        .await
        .unwrap();
    assert_eq!(route, Route::Login);

    let route = orchestrator.update_talk(&ctx, &seeded).await.unwrap();
    assert_eq!(route, Route::Login);

    let route = orchestrator.toggle_select(&ctx, seeded.id).await.unwrap();
    assert_eq!(route, Route::Login);

    let route = orchestrator.delete_talk(&ctx, &seeded).await.unwrap();
    assert_eq!(route, Route::Login);

    // Nothing was mutated along the way
    let survivors = talks.list_talks().await.unwrap();
    assert_eq!(survivors.len(), 1);
    assert!(!survivors[0].is_selected);
}

#[tokio::test]
async fn a_forged_token_is_treated_as_anonymous() {
    let (orchestrator, _, _) = orchestrator();
    let ctx = RequestContext::with_token("not-a-real-token");

    assert_eq!(
        orchestrator.home(&ctx).await.unwrap(),
        Outcome::Redirect(Route::Login)
    );
}

// =============================================================================
// Cross-user boundaries
// =============================================================================

#[tokio::test]
async fn users_may_edit_each_others_talks() {
    // Authorship is a display tag; talk mutations are open to any signed-in user
    let (orchestrator, _, talks) = orchestrator();
    let alice = login_as(&orchestrator, "alice").await;
    let bob = login_as(&orchestrator, "bob").await;

    orchestrator
        .create_talk(&alice, TalkDraft::mock("Talk A"))
        .await
        .unwrap();
    let mut talk = talks.list_talks().await.unwrap().remove(0);
    assert_eq!(talk.author_name, "alice");

    talk.title = "Talk A, amended".to_owned();
    let route = orchestrator.update_talk(&bob, &talk).await.unwrap();
    assert_eq!(route, Route::Home);

    let route = orchestrator.delete_talk(&bob, &talk).await.unwrap();
    assert_eq!(route, Route::Home);
}

#[tokio::test]
async fn users_may_not_edit_each_others_profiles() {
    let (orchestrator, users, _) = orchestrator();
    login_as(&orchestrator, "alice").await;
    let bob = login_as(&orchestrator, "bob").await;

    let alice_record = users.find_user_by_username("alice").await.unwrap().unwrap();

    let route = orchestrator
        .update_profile(
            &bob,
            ProfileUpdate {
                user_id: alice_record.id,
                username: "hijacked".to_owned(),
                password: "newpassword1".to_owned(),
            },
        )
        .await
        .unwrap();
    assert_eq!(route, Route::Profile);

    // Alice's record is untouched
    let unchanged = users
        .find_user_by_id(alice_record.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.username, "alice");
}

// =============================================================================
// Guard decisions in isolation
// =============================================================================

#[test]
fn guard_denies_anonymous_callers() {
    let decision = authorize(None, &ProtectedAction::ListTalks);
    assert_eq!(decision, Decision::Deny(DenyReason::NotAuthenticated));
}

#[test]
fn guard_checks_ownership_only_for_profile_updates() {
    let alice = Identity {
        user_id: 1,
        username: "alice".to_owned(),
    };

    assert_eq!(
        authorize(Some(&alice), &ProtectedAction::DeleteTalk),
        Decision::Allow
    );
    assert_eq!(
        authorize(
            Some(&alice),
            &ProtectedAction::UpdateProfile { target_user_id: 1 }
        ),
        Decision::Allow
    );
    assert_eq!(
        authorize(
            Some(&alice),
            &ProtectedAction::UpdateProfile { target_user_id: 2 }
        ),
        Decision::Deny(DenyReason::Forbidden)
    );
}
