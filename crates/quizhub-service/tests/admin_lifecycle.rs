//! Admin user management: self-demotion, lockout guards, deletion.

mod common;

use common::TestApp;
use quizhub_core::error::ErrorKind;
use quizhub_entity::user::{IdentityPatch, Role};

fn demote() -> IdentityPatch {
    IdentityPatch {
        role: Some(Role::User),
        ..IdentityPatch::default()
    }
}

#[tokio::test]
async fn test_self_demotion_invalidates_the_acting_session() {
    let app = TestApp::new();
    let (_, a1) = app.register_and_login("Root", "root@example.com", "secret1").await;
    app.promote_to_admin(&a1.id).await;
    let (_, a2) = app.register_and_login("Other", "other@example.com", "secret2").await;
    app.promote_to_admin(&a2.id).await;

    // Fresh login so the acting principal carries the admin role.
    let (sid, acting) = app
        .accounts
        .login("pre-login", "root@example.com", "secret1")
        .await
        .unwrap();
    assert!(acting.is_admin());

    let updated = app
        .admin
        .update_user(Some(&acting), &sid, &acting.id, demote())
        .await
        .unwrap();
    assert_eq!(updated.role, Role::User);

    // The old session is gone: it now resolves anonymous, so a repeat
    // of any admin-gated call fails role bypass.
    assert!(app.resolver.resolve(&sid).await.is_none());
    let err = app.admin.list_users(None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_demoting_another_admin_keeps_the_acting_session() {
    let app = TestApp::new();
    let (_, a1) = app.register_and_login("Root", "root@example.com", "secret1").await;
    app.promote_to_admin(&a1.id).await;
    let (_, a2) = app.register_and_login("Other", "other@example.com", "secret2").await;
    app.promote_to_admin(&a2.id).await;

    let (sid, acting) = app
        .accounts
        .login("pre-login", "root@example.com", "secret1")
        .await
        .unwrap();

    app.admin
        .update_user(Some(&acting), &sid, &a2.id, demote())
        .await
        .unwrap();

    let still_admin = app.resolver.resolve(&sid).await.unwrap();
    assert!(still_admin.is_admin());
}

#[tokio::test]
async fn test_last_admin_cannot_be_demoted() {
    let app = TestApp::new();
    let (_, a1) = app.register_and_login("Root", "root@example.com", "secret1").await;
    app.promote_to_admin(&a1.id).await;

    let (sid, acting) = app
        .accounts
        .login("pre-login", "root@example.com", "secret1")
        .await
        .unwrap();

    let err = app
        .admin
        .update_user(Some(&acting), &sid, &acting.id, demote())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    // The session survives a refused demotion.
    assert!(app.resolver.resolve(&sid).await.is_some());
}

#[tokio::test]
async fn test_last_admin_cannot_be_deleted() {
    let app = TestApp::new();
    let (_, a1) = app.register_and_login("Root", "root@example.com", "secret1").await;
    app.promote_to_admin(&a1.id).await;

    let (sid, acting) = app
        .accounts
        .login("pre-login", "root@example.com", "secret1")
        .await
        .unwrap();

    let err = app
        .admin
        .delete_user(Some(&acting), &sid, &acting.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_deleted_user_session_degrades_to_anonymous() {
    let app = TestApp::new();
    let (_, admin) = app.register_and_login("Root", "root@example.com", "secret1").await;
    app.promote_to_admin(&admin.id).await;
    let (admin_sid, acting) = app
        .accounts
        .login("pre-login", "root@example.com", "secret1")
        .await
        .unwrap();

    let (user_sid, target) = app
        .register_and_login("Bob", "bob@example.com", "secret2")
        .await;
    assert!(app.resolver.resolve(&user_sid).await.is_some());

    app.admin
        .delete_user(Some(&acting), &admin_sid, &target.id)
        .await
        .unwrap();

    // No explicit session cleanup: the identity lookup fails, so the
    // orphaned session resolves anonymous instead of erroring.
    assert!(app.resolver.resolve(&user_sid).await.is_none());
}

#[tokio::test]
async fn test_non_admin_cannot_manage_users() {
    let app = TestApp::new();
    let (sid, user) = app.register_and_login("Bob", "bob@example.com", "secret2").await;

    let err = app.admin.list_users(Some(&user)).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    let err = app
        .admin
        .update_user(Some(&user), &sid, &user.id, demote())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[tokio::test]
async fn test_admin_update_respects_email_uniqueness() {
    let app = TestApp::new();
    let (_, admin) = app.register_and_login("Root", "root@example.com", "secret1").await;
    app.promote_to_admin(&admin.id).await;
    let (sid, acting) = app
        .accounts
        .login("pre-login", "root@example.com", "secret1")
        .await
        .unwrap();

    let (_, bob) = app.register_and_login("Bob", "bob@example.com", "secret2").await;

    let err = app
        .admin
        .update_user(
            Some(&acting),
            &sid,
            &bob.id,
            IdentityPatch {
                email: Some("root@example.com".into()),
                ..IdentityPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}
