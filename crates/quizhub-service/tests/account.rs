//! Account lifecycle: registration, login, credential changes.

mod common;

use common::TestApp;
use quizhub_core::error::ErrorKind;
use quizhub_service::account::RegisterRequest;

fn request(email: &str) -> RegisterRequest {
    RegisterRequest {
        display_name: "Alice".into(),
        email: email.into(),
        password: "secret1".into(),
        password_confirm: "secret1".into(),
    }
}

#[tokio::test]
async fn test_login_rotates_the_session_and_resolves_the_principal() {
    let app = TestApp::new();
    let (sid, principal) = app
        .register_and_login("Alice", "alice@example.com", "secret1")
        .await;

    assert_ne!(sid, "pre-login");
    let resolved = app.resolver.resolve(&sid).await.unwrap();
    assert_eq!(resolved, principal);
}

#[tokio::test]
async fn test_duplicate_email_conflicts_case_insensitively() {
    let app = TestApp::new();
    app.accounts.register(request("alice@example.com")).await.unwrap();

    let err = app
        .accounts
        .register(request("Alice@Example.COM"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_invalid_credentials_are_indistinguishable() {
    let app = TestApp::new();
    app.accounts.register(request("alice@example.com")).await.unwrap();

    let unknown = app
        .accounts
        .login("sid", "nobody@example.com", "secret1")
        .await
        .unwrap_err();
    let wrong = app
        .accounts
        .login("sid", "alice@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(unknown.kind, ErrorKind::Authentication);
    assert_eq!(wrong.kind, ErrorKind::Authentication);
    assert_eq!(unknown.message, wrong.message);
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let app = TestApp::new();
    let mut req = request("alice@example.com");
    req.password = "tiny".into();
    req.password_confirm = "tiny".into();

    let err = app.accounts.register(req).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_change_password_requires_the_current_one() {
    let app = TestApp::new();
    let (_, principal) = app
        .register_and_login("Alice", "alice@example.com", "secret1")
        .await;

    let err = app
        .accounts
        .change_password(&principal, "wrong", "newsecret")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);

    app.accounts
        .change_password(&principal, "secret1", "newsecret")
        .await
        .unwrap();

    // Old password no longer works, new one does.
    assert!(
        app.accounts
            .login("sid", "alice@example.com", "secret1")
            .await
            .is_err()
    );
    app.accounts
        .login("sid", "alice@example.com", "newsecret")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logout_destroys_the_session() {
    let app = TestApp::new();
    let (sid, _) = app
        .register_and_login("Alice", "alice@example.com", "secret1")
        .await;

    app.accounts.logout(&sid).await.unwrap();
    assert!(app.resolver.resolve(&sid).await.is_none());
}

#[tokio::test]
async fn test_delete_account_verifies_password_and_ends_the_session() {
    let app = TestApp::new();
    let (sid, principal) = app
        .register_and_login("Alice", "alice@example.com", "secret1")
        .await;

    let err = app
        .accounts
        .delete_account(&principal, "wrong", &sid)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);

    app.accounts
        .delete_account(&principal, "secret1", &sid)
        .await
        .unwrap();

    assert!(app.resolver.resolve(&sid).await.is_none());
    assert!(
        app.accounts
            .login("sid", "alice@example.com", "secret1")
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_last_admin_cannot_delete_their_account() {
    let app = TestApp::new();
    let (_, admin) = app
        .register_and_login("Root", "root@example.com", "secret1")
        .await;
    app.promote_to_admin(&admin.id).await;
    let (sid, acting) = app
        .accounts
        .login("pre-login", "root@example.com", "secret1")
        .await
        .unwrap();

    let err = app
        .accounts
        .delete_account(&acting, "secret1", &sid)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}
