use super::utils::{validate_credentials, LoginFormState};
use crate::{
    api::{ApiError, LoginRequest},
    components::layout::{landing_path, use_access_table},
    state::session::{use_login_action, use_session, GuardDecision},
    utils::{navigation::redirect_to, token::now_epoch_seconds},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let password = self.form.password.get_untracked();
        match validate_credentials(&self.form.mobile.get_untracked(), &password) {
            Ok(mobile) => {
                self.error.set(None);
                self.login_action.dispatch(LoginRequest { mobile, password });
            }
            Err(msg) => self.error.set(Some(ApiError::validation(msg))),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let session = use_session();
    let state = session.state();
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = use_login_action();
    let table = use_access_table();

    create_effect(move |_| {
        let landing = state.with(|s| {
            GuardDecision::evaluate(s, now_epoch_seconds())
                .allows_render()
                .then(|| s.role_code().map(|code| landing_path(&table, code)))
                .flatten()
        });
        if let Some(path) = landing {
            redirect_to(path);
        }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.reset_password();
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
