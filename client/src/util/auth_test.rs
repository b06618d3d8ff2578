use super::*;

const FORBIDDEN_DELAY: Duration = Duration::from_secs(2);

#[test]
fn signed_out_redirects_immediately() {
    assert_eq!(redirect_delay(GuardDecision::RedirectHome, FORBIDDEN_DELAY), Some(Duration::ZERO));
}

#[test]
fn forbidden_redirects_after_panel_delay() {
    assert_eq!(redirect_delay(GuardDecision::Forbidden, FORBIDDEN_DELAY), Some(FORBIDDEN_DELAY));
}

#[test]
fn loading_does_not_redirect() {
    assert_eq!(redirect_delay(GuardDecision::Loading, FORBIDDEN_DELAY), None);
}

#[test]
fn render_does_not_redirect() {
    assert_eq!(redirect_delay(GuardDecision::Render, FORBIDDEN_DELAY), None);
}
