use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, DashboardCounts, LoginRequest, LoginResponse, User},
    utils::{
        storage::{default_store, KeyValueStore, StorageError},
        token,
    },
};
use leptos::*;

pub const TOKEN_KEY: &str = "token";
pub const NAME_KEY: &str = "name";
pub const USER_TYPE_KEY: &str = "userType";
pub const EMAIL_KEY: &str = "email";
pub const MOBILE_KEY: &str = "mobile";
pub const CITY_KEY: &str = "city";
pub const STATE_KEY: &str = "state";
pub const USER_ID_KEY: &str = "userId";
pub const PHOTO_KEY: &str = "photo";

/// Every key the session mirror may write.
pub const STORAGE_KEYS: [&str; 9] = [
    TOKEN_KEY,
    NAME_KEY,
    USER_TYPE_KEY,
    EMAIL_KEY,
    MOBILE_KEY,
    CITY_KEY,
    STATE_KEY,
    USER_ID_KEY,
    PHOTO_KEY,
];

/// `is_authenticated` implies `user` and `token` are both set. Only the
/// transition methods on [`SessionStore`] construct authenticated values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
    pub error: Option<ApiError>,
    pub loading: bool,
    pub dashboard_counts: Option<DashboardCounts>,
}

impl SessionState {
    fn authenticated(user: User, token: String) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            token: Some(token),
            ..Self::default()
        }
    }

    pub fn role_code(&self) -> Option<i32> {
        self.user.as_ref().map(|user| user.user_type)
    }
}

pub fn persist_session(
    storage: &dyn KeyValueStore,
    user: &User,
    token: &str,
) -> Result<(), StorageError> {
    storage.set(TOKEN_KEY, token)?;
    storage.set(NAME_KEY, &user.name)?;
    storage.set(USER_TYPE_KEY, &user.user_type.to_string())?;
    storage.set(EMAIL_KEY, &user.email)?;
    storage.set(MOBILE_KEY, &user.mobile)?;
    storage.set(CITY_KEY, &user.city)?;
    storage.set(STATE_KEY, &user.state)?;
    storage.set(USER_ID_KEY, &user.id)?;
    match &user.photo {
        Some(photo) => storage.set(PHOTO_KEY, photo),
        None => storage.remove(PHOTO_KEY),
    }
}

/// Removes every mirrored key, continuing past failures; the first failure
/// is reported.
pub fn clear_persisted_session(storage: &dyn KeyValueStore) -> Result<(), StorageError> {
    let mut first_error = None;
    for key in STORAGE_KEYS {
        if let Err(err) = storage.remove(key) {
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}

/// Rebuilds a session from the durable mirror. Incomplete mirrors are
/// discarded rather than half-trusted.
pub fn rehydrate(storage: &dyn KeyValueStore) -> SessionState {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
    let user_id = storage.get(USER_ID_KEY).filter(|id| !id.is_empty());
    let user_type = storage
        .get(USER_TYPE_KEY)
        .and_then(|raw| raw.trim().parse::<i32>().ok());

    let (Some(token), Some(id), Some(user_type)) = (token, user_id, user_type) else {
        if STORAGE_KEYS.iter().any(|key| storage.get(key).is_some()) {
            log::warn!("discarding incomplete session mirror");
            if let Err(err) = clear_persisted_session(storage) {
                log::warn!("failed to clear session mirror: {}", err);
            }
        }
        return SessionState::default();
    };

    let text = |key: &str| storage.get(key).unwrap_or_default();
    let user = User {
        id,
        name: text(NAME_KEY),
        user_type,
        email: text(EMAIL_KEY),
        mobile: text(MOBILE_KEY),
        city: text(CITY_KEY),
        state: text(STATE_KEY),
        photo: storage.get(PHOTO_KEY).filter(|p| !p.is_empty()),
    };
    SessionState::authenticated(user, token)
}

/// Outcome of checking a session before a protected view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    SignIn,
    /// Token present but expired; the session must be torn down first.
    ExpiredSession,
}

impl GuardDecision {
    pub fn evaluate(state: &SessionState, now: i64) -> Self {
        if let Some(token) = state.token.as_deref() {
            if token::is_expired_at(Some(token), now) {
                return GuardDecision::ExpiredSession;
            }
        }
        if state.is_authenticated {
            GuardDecision::Render
        } else {
            GuardDecision::SignIn
        }
    }

    pub fn allows_render(self) -> bool {
        self == GuardDecision::Render
    }
}

/// Single writer for the session. Owned by the app root and shared through
/// context.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let initial = rehydrate(storage.as_ref());
        Self {
            state: create_rw_signal(initial),
            storage,
        }
    }

    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn begin_login(&self) {
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    pub fn login_succeeded(&self, response: LoginResponse) {
        let persisted = persist_session(self.storage.as_ref(), &response.user, &response.token);
        if let Err(err) = persisted {
            log::warn!("session mirror not written: {}", err);
        }
        self.state
            .set(SessionState::authenticated(response.user, response.token));
    }

    pub fn login_failed(&self, error: ApiError) {
        if let Err(err) = clear_persisted_session(self.storage.as_ref()) {
            log::warn!("failed to clear session mirror: {}", err);
        }
        self.state.set(SessionState {
            error: Some(error),
            ..SessionState::default()
        });
    }

    /// Clears the mirror and the in-memory session together. Safe to repeat.
    pub fn logout(&self) {
        if let Err(err) = clear_persisted_session(self.storage.as_ref()) {
            log::warn!("failed to clear session mirror: {}", err);
        }
        let was_authenticated = self.state.with_untracked(|state| state.is_authenticated);
        self.state.set(SessionState::default());
        if was_authenticated {
            log::info!("signed out");
        }
    }

    /// Evaluates the guard and performs the expiry teardown it calls for.
    pub fn guard(&self, now: i64) -> GuardDecision {
        let decision = self
            .state
            .with_untracked(|state| GuardDecision::evaluate(state, now));
        if decision == GuardDecision::ExpiredSession {
            log::info!("session token expired; signing out");
            self.logout();
        }
        decision
    }

    pub fn set_dashboard_counts(&self, counts: DashboardCounts) {
        self.state.update(|state| {
            if state.is_authenticated {
                state.dashboard_counts = Some(counts);
            }
        });
    }
}

#[component]
pub fn SessionProvider(
    #[prop(optional)] storage: Option<Rc<dyn KeyValueStore>>,
    children: Children,
) -> impl IntoView {
    let store = SessionStore::new(storage.unwrap_or_else(default_store));
    provide_context(store);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionStore {
    match use_context::<SessionStore>() {
        Some(store) => store,
        None => {
            let store = SessionStore::new(default_store());
            provide_context(store.clone());
            store
        }
    }
}

pub async fn login(
    api: &ApiClient,
    store: &SessionStore,
    request: LoginRequest,
) -> Result<(), ApiError> {
    store.begin_login();
    match api.login(&request).await {
        Ok(response) => {
            log::info!(
                "signed in user {} (user_type {})",
                response.user.id,
                response.user.user_type
            );
            store.login_succeeded(response);
            Ok(())
        }
        Err(error) => {
            log::warn!("sign-in rejected: {}", error.code);
            store.login_failed(error.clone());
            Err(error)
        }
    }
}

pub fn logout(store: &SessionStore) {
    store.logout();
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let store = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        let store = store.clone();
        async move { login(&api, &store, payload).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let store = use_session();
    create_action(move |_: &()| {
        let store = store.clone();
        async move { logout(&store) }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn empty_storage_yields_signed_out_session() {
        with_runtime(|| {
            let store = store_with(&MemoryStorage::new());
            assert_eq!(store.get(), SessionState::default());
        });
    }

    #[test]
    fn login_success_sets_session_and_mirror() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            let store = store_with(&storage);
            store.login_succeeded(login_response(3, "h.p.s"));

            let state = store.get();
            assert!(state.is_authenticated);
            assert_eq!(state.token.as_deref(), Some("h.p.s"));
            assert_eq!(state.role_code(), Some(3));
            assert!(state.error.is_none());

            for key in STORAGE_KEYS {
                assert!(storage.get(key).is_some(), "missing mirror key {}", key);
            }
            assert_eq!(storage.get(USER_TYPE_KEY).as_deref(), Some("3"));
            assert_eq!(storage.get(USER_ID_KEY).as_deref(), Some("41"));
        });
    }

    #[test]
    fn mirror_rehydrates_on_startup() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            persist_session(&storage, &user(6), "h.p.s").unwrap();

            let store = store_with(&storage);
            let state = store.get();
            assert!(state.is_authenticated);
            assert_eq!(state.user, Some(user(6)));
            assert_eq!(state.token.as_deref(), Some("h.p.s"));
        });
    }

    #[test]
    fn user_without_photo_clears_stale_photo_key() {
        let storage = MemoryStorage::new();
        storage.set(PHOTO_KEY, "old.png").unwrap();
        let mut no_photo = user(2);
        no_photo.photo = None;
        persist_session(&storage, &no_photo, "t.t.t").unwrap();
        assert!(storage.get(PHOTO_KEY).is_none());
        assert_eq!(rehydrate(&storage).user.unwrap().photo, None);
    }

    #[test]
    fn incomplete_mirror_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "h.p.s").unwrap();
        storage.set(NAME_KEY, "Ravi").unwrap();
        storage.set(USER_TYPE_KEY, "not-a-number").unwrap();

        let state = rehydrate(&storage);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn logout_clears_everything_and_is_idempotent() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            let store = store_with(&storage);
            store.login_succeeded(login_response(2, "h.p.s"));
            store.set_dashboard_counts(DashboardCounts {
                leads: 4,
                ..DashboardCounts::default()
            });
            assert!(store.get().dashboard_counts.is_some());

            store.logout();
            assert_eq!(store.get(), SessionState::default());
            assert!(storage.is_empty());

            store.logout();
            assert_eq!(store.get(), SessionState::default());
            assert!(storage.is_empty());
        });
    }

    #[test]
    fn login_failure_records_error_and_stays_signed_out() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            storage.set(TOKEN_KEY, "leftover").unwrap();
            let store = store_with(&storage);
            store.begin_login();
            assert!(store.get().loading);

            store.login_failed(ApiError::invalid_credentials());
            let state = store.get();
            assert!(!state.is_authenticated);
            assert!(!state.loading);
            assert!(state.user.is_none() && state.token.is_none());
            assert_eq!(
                state.error.map(|e| e.error).as_deref(),
                Some("Invalid mobile number or password")
            );
            assert!(storage.is_empty());
        });
    }

    #[test]
    fn guard_renders_fresh_authenticated_session() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            let store = store_with(&storage);
            store.login_succeeded(login_response(2, &token::token_expiring_at(2_000)));
            assert_eq!(store.guard(1_000), GuardDecision::Render);
            assert!(store.get().is_authenticated);
            assert!(!storage.is_empty());
        });
    }

    #[test]
    fn guard_tears_down_expired_session() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            let store = store_with(&storage);
            store.login_succeeded(login_response(2, &token::token_expiring_at(999)));
            assert_eq!(store.guard(1_000), GuardDecision::ExpiredSession);
            assert_eq!(store.get(), SessionState::default());
            assert!(storage.is_empty());
        });
    }

    #[test]
    fn guard_treats_malformed_token_as_expired() {
        with_runtime(|| {
            let store = store_with(&MemoryStorage::new());
            store.login_succeeded(login_response(5, "not-a-jwt"));
            assert_eq!(store.guard(0), GuardDecision::ExpiredSession);
            assert!(!store.get().is_authenticated);
        });
    }

    #[test]
    fn guard_sends_signed_out_session_to_sign_in() {
        let state = SessionState::default();
        assert_eq!(GuardDecision::evaluate(&state, 0), GuardDecision::SignIn);
        assert!(!GuardDecision::evaluate(&state, 0).allows_render());
    }

    #[test]
    fn dashboard_counts_are_ignored_when_signed_out() {
        with_runtime(|| {
            let store = store_with(&MemoryStorage::new());
            store.set_dashboard_counts(DashboardCounts::default());
            assert!(store.get().dashboard_counts.is_none());
        });
    }

    #[test]
    fn use_session_provides_a_store_without_provider() {
        with_runtime(|| {
            let first = use_session();
            first.login_succeeded(login_response(4, "h.p.s"));
            let second = use_session();
            assert!(second.get().is_authenticated);
        });
    }
}
