#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::rc::Rc;

    use crate::state::session::{fixtures, persist_session, SessionStore};
    use crate::utils::storage::MemoryStorage;
    use leptos::*;

    /// Provides a store rehydrated from a mirror holding `user_type`/`token`.
    pub fn provide_session(user_type: i32, token: &str) -> (SessionStore, MemoryStorage) {
        let memory = MemoryStorage::new();
        persist_session(&memory, &fixtures::user(user_type), token).unwrap();
        let store = SessionStore::new(Rc::new(memory.clone()));
        provide_context(store.clone());
        (store, memory)
    }

    pub fn provide_signed_out_session() -> SessionStore {
        let store = SessionStore::new(Rc::new(MemoryStorage::new()));
        provide_context(store.clone());
        store
    }
}
