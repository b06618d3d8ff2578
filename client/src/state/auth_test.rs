use super::*;

#[test]
fn auth_redirects_replace_history() {
    assert!(replace_options().replace);
}

#[test]
fn auth_redirects_keep_default_scroll_and_resolve() {
    let options = replace_options();
    let defaults = NavigateOptions::default();
    assert_eq!(options.resolve, defaults.resolve);
    assert_eq!(options.scroll, defaults.scroll);
}

#[test]
fn server_token_store_starts_empty() {
    use session::TokenStore;

    let store = BrowserTokenStore::new("token");
    store.set("abc123");
    assert_eq!(store.get(), None);
}

#[test]
fn unmounted_browser_session_is_loading() {
    let config = AuthConfig::default();
    let session: BrowserSession =
        AuthSession::new(config.clone(), BrowserTokenStore::new(&config.token_key), ApiResolver::new(&config));
    assert_eq!(session.state(), SessionState::initial());
    assert_eq!(session.role(), RoleFlags::default());
}
