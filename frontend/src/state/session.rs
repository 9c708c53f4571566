use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use leptos::*;
use serde::{Deserialize, Serialize};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{api::ApiClient, utils::storage as storage_utils};

const TOKEN_KEY: &str = "access_token";
const USER_KEY: &str = "current_user";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hr,
    Employee,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Hr => "HR Manager",
            Role::Employee => "Employee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

type Listener = Rc<dyn Fn(&SessionState)>;

struct SessionInner {
    state: RefCell<SessionState>,
    listeners: RefCell<Vec<Listener>>,
    terminations: Cell<u32>,
}

/// Credentials and identity of the signed-in user.
///
/// Cloning shares the same underlying session. `ApiClient` holds one and
/// calls [`Session::end`] when the backend rejects the credentials.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    pub fn new(state: SessionState) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
                terminations: Cell::new(0),
            }),
        }
    }

    pub fn signed_out() -> Self {
        Self::new(SessionState::default())
    }

    pub fn authenticated(token: impl Into<String>, user: SessionUser) -> Self {
        Self::new(SessionState {
            token: Some(token.into()),
            user: Some(user),
        })
    }

    /// Session left in `localStorage` by the identity provider sign-in.
    pub fn restore() -> Self {
        let token = storage_utils::read_item(TOKEN_KEY);
        let user = storage_utils::read_item(USER_KEY)
            .and_then(|raw| serde_json::from_str::<SessionUser>(&raw).ok());
        Self::new(SessionState { token, user })
    }

    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.inner.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// How many times this session has been ended.
    pub fn terminations(&self) -> u32 {
        self.inner.terminations.get()
    }

    /// Token for the `Authorization` header. An expired token ends the session.
    pub fn bearer(&self) -> Option<String> {
        let token = self.inner.state.borrow().token.clone()?;
        if is_expired(&token, chrono::Utc::now().timestamp()) {
            log::warn!("access token expired; ending session");
            self.end();
            return None;
        }
        Some(token)
    }

    /// Clears credentials everywhere and sends the browser to the login view.
    pub fn end(&self) {
        storage_utils::remove_items(&[TOKEN_KEY, USER_KEY]);
        self.inner
            .terminations
            .set(self.inner.terminations.get().wrapping_add(1));
        self.replace(SessionState::default());
        storage_utils::redirect_to(LOGIN_PATH);
    }

    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn replace(&self, next: SessionState) {
        *self.inner.state.borrow_mut() = next;
        let snapshot = self.snapshot();
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    claims.get("exp")?.as_i64()
}

/// Opaque (non-JWT) tokens never expire client-side; the backend decides.
fn is_expired(token: &str, now: i64) -> bool {
    token_expiry(token).map(|exp| exp <= now).unwrap_or(false)
}

#[derive(Clone, Copy)]
pub struct SessionSignal(pub ReadSignal<SessionState>);

#[component]
pub fn SessionProvider(
    #[prop(optional)] session: Option<Session>,
    children: Children,
) -> impl IntoView {
    let session = session.unwrap_or_else(Session::restore);
    let (state, set_state) = create_signal(session.snapshot());
    session.subscribe(move |next| {
        let _ = set_state.try_set(next.clone());
    });
    provide_context(session.clone());
    provide_context(SessionSignal(state));
    provide_context(ApiClient::new(session));
    view! { <>{children()}</> }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::restore)
}

pub fn use_session_state() -> Signal<SessionState> {
    match use_context::<SessionSignal>() {
        Some(SessionSignal(state)) => state.into(),
        None => {
            let snapshot = use_session().snapshot();
            Signal::derive(move || snapshot.clone())
        }
    }
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, hr_user};

    fn jwt_with_exp(exp: i64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{}}}"#, exp));
        format!("eyJhbGciOiJIUzI1NiJ9.{}.signature", payload)
    }

    #[test]
    fn token_expiry_reads_exp_claim() {
        assert_eq!(token_expiry(&jwt_with_exp(1_700_000_000)), Some(1_700_000_000));
        assert_eq!(token_expiry("opaque-token"), None);
        assert_eq!(token_expiry("a.!!!.c"), None);
    }

    #[test]
    fn expiry_check_treats_opaque_tokens_as_valid() {
        assert!(is_expired(&jwt_with_exp(100), 100));
        assert!(!is_expired(&jwt_with_exp(200), 100));
        assert!(!is_expired("opaque-token", i64::MAX));
    }

    #[test]
    fn bearer_returns_live_token() {
        let session = Session::authenticated("opaque-token", hr_user());
        assert_eq!(session.bearer().as_deref(), Some("opaque-token"));
        assert_eq!(session.terminations(), 0);
    }

    #[test]
    fn expired_bearer_ends_session() {
        let session = Session::authenticated(jwt_with_exp(1), employee_user());
        assert!(session.bearer().is_none());
        assert!(!session.is_authenticated());
        assert_eq!(session.terminations(), 1);
    }

    #[test]
    fn end_notifies_subscribers_and_clears_identity() {
        let session = Session::authenticated("t", hr_user());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        session.subscribe(move |state| sink.borrow_mut().push(state.is_authenticated()));

        session.end();

        assert_eq!(*seen.borrow(), vec![false]);
        assert!(session.user().is_none());
        assert!(session.snapshot().token.is_none());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = hr_user();
        user.name = None;
        assert_eq!(user.display_name(), user.email);
        user.name = Some("Hana".into());
        assert_eq!(user.display_name(), "Hana");
    }

    #[test]
    fn role_deserializes_lowercase() {
        let user: SessionUser =
            serde_json::from_str(r#"{"email":"a@b.c","role":"hr"}"#).unwrap();
        assert_eq!(user.role, Role::Hr);
    }
}
