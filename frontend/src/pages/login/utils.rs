use leptos::*;

pub const MOBILE_DIGITS: usize = 10;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub mobile: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            mobile: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn reset_password(&self) {
        self.password.set(String::new());
    }
}

/// Returns the trimmed mobile number when both fields pass.
pub fn validate_credentials(mobile: &str, password: &str) -> Result<String, String> {
    let mobile = mobile.trim();
    if mobile.is_empty() {
        return Err("Please enter your mobile number".into());
    }
    if mobile.len() != MOBILE_DIGITS || !mobile.chars().all(|c| c.is_ascii_digit()) {
        return Err("Mobile number must be 10 digits".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(mobile.to_string())
}
