//! Shared test harness wiring the full service stack over memory stores.

use std::sync::Arc;

use quizhub_auth::password::{PasswordHasher, PasswordValidator};
use quizhub_auth::policy::PolicyEvaluator;
use quizhub_auth::principal::Principal;
use quizhub_auth::session::{SessionManager, SessionResolver};
use quizhub_entity::user::{IdentityPatch, Role};
use quizhub_service::{
    AccountService, AdminService, CategoryService, QuizService, ScoreService,
    account::RegisterRequest,
};
use quizhub_store::memory::{
    MemoryCategoryStore, MemoryIdentityStore, MemoryQuizStore, MemorySessionStore,
};
use quizhub_store::traits::IdentityStore;

pub struct TestApp {
    pub identities: Arc<MemoryIdentityStore>,
    pub resolver: SessionResolver,
    pub accounts: AccountService,
    pub quizzes: QuizService,
    pub categories: CategoryService,
    pub admin: AdminService,
    pub scores: ScoreService,
}

impl TestApp {
    pub fn new() -> Self {
        let sessions = Arc::new(MemorySessionStore::default());
        let identities = Arc::new(MemoryIdentityStore::new());
        let quiz_store = Arc::new(MemoryQuizStore::new());
        let category_store = Arc::new(MemoryCategoryStore::new());

        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::default());
        let evaluator = PolicyEvaluator::new();
        let manager = SessionManager::new(sessions.clone());

        Self {
            identities: identities.clone(),
            resolver: SessionResolver::new(sessions.clone(), identities.clone()),
            accounts: AccountService::new(
                identities.clone(),
                manager.clone(),
                hasher.clone(),
                validator.clone(),
            ),
            quizzes: QuizService::new(quiz_store.clone(), evaluator.clone()),
            categories: CategoryService::new(
                category_store.clone(),
                quiz_store.clone(),
                evaluator.clone(),
            ),
            admin: AdminService::new(
                identities.clone(),
                evaluator,
                manager,
                hasher,
                validator,
            ),
            scores: ScoreService::new(quiz_store, identities),
        }
    }

    /// Registers an account and logs it in, returning the live session
    /// id and the resolved principal.
    pub async fn register_and_login(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> (String, Principal) {
        self.accounts
            .register(RegisterRequest {
                display_name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                password_confirm: password.to_string(),
            })
            .await
            .expect("registration should succeed");

        self.accounts
            .login("pre-login", email, password)
            .await
            .expect("login should succeed")
    }

    /// Promotes an identity to admin directly in the store.
    pub async fn promote_to_admin(&self, id: &str) {
        self.identities
            .update_fields(
                id,
                IdentityPatch {
                    role: Some(Role::Admin),
                    ..IdentityPatch::default()
                },
            )
            .await
            .expect("store should be reachable")
            .expect("identity should exist");
    }
}
