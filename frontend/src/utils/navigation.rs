pub const SIGN_IN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Full-page navigation, which also drops any in-flight page state.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = web_sys::window() {
            let location = win.location();
            if location.pathname().ok().as_deref() == Some(path) {
                return;
            }
            if let Err(err) = location.set_href(path) {
                log::error!("navigation to {} failed: {:?}", path, err);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("skipping navigation to {} outside the browser", path);
        #[cfg(test)]
        REDIRECTS.with(|redirects| redirects.borrow_mut().push(path.to_string()));
    }
}

pub fn redirect_to_sign_in() {
    redirect_to(SIGN_IN_PATH);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
thread_local! {
    static REDIRECTS: std::cell::RefCell<Vec<String>> = const {
        std::cell::RefCell::new(Vec::new())
    };
}

/// Drains the redirects requested on this thread.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn take_redirects() -> Vec<String> {
    REDIRECTS.with(|redirects| redirects.take())
}
