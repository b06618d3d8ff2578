use super::*;
use crate::user::Role;

fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@sho.rt"),
        name: id.to_uppercase(),
        avatar: None,
        role,
    }
}

fn ticket_of(begin: Begin) -> Ticket {
    match begin {
        Begin::Resolve(ticket) => ticket,
        Begin::Settled => panic!("expected a resolution ticket"),
    }
}

// =============================================================================
// SessionState
// =============================================================================

#[test]
fn initial_state_is_loading_without_user() {
    let state = SessionState::initial();
    assert!(state.loading);
    assert_eq!(state.user, None);
    assert_eq!(state.token, None);
    assert_eq!(state.phase(), AuthPhase::Resolving);
    assert_eq!(SessionState::default(), state);
}

#[test]
fn phase_prefers_loading_over_user() {
    let state = SessionState {
        user: Some(user("u1", Role::User)),
        loading: true,
        token: Some("t".to_owned()),
        notice: None,
    };
    assert_eq!(state.phase(), AuthPhase::Resolving);
    assert!(!state.is_authenticated());
}

#[test]
fn signed_out_state_is_unauthenticated() {
    assert_eq!(SessionState::signed_out().phase(), AuthPhase::Unauthenticated);
}

#[test]
fn state_role_projects_user() {
    let state = SessionState {
        user: Some(user("u1", Role::Admin)),
        loading: false,
        token: Some("t".to_owned()),
        notice: None,
    };
    assert!(state.role().is_admin);
    assert!(!state.role().is_super_admin);
}

#[test]
fn expired_notice_has_message() {
    assert!(SessionNotice::Expired.message().contains("expired"));
}

// =============================================================================
// SessionMachine::begin
// =============================================================================

#[test]
fn begin_without_token_settles_unauthenticated() {
    let mut machine = SessionMachine::new();
    assert_eq!(machine.begin(None), Begin::Settled);
    assert_eq!(machine.state(), &SessionState::signed_out());
    assert_eq!(machine.issued(), 1);
}

#[test]
fn begin_with_token_enters_resolving() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("abc".to_owned())));
    assert_eq!(ticket.token(), "abc");
    assert_eq!(ticket.seq(), 1);
    assert!(machine.state().loading);
    assert_eq!(machine.state().token.as_deref(), Some("abc"));
    assert_eq!(machine.state().phase(), AuthPhase::Resolving);
}

#[test]
fn begin_issues_increasing_sequence_numbers() {
    let mut machine = SessionMachine::new();
    let a = ticket_of(machine.begin(Some("t".to_owned())));
    let b = ticket_of(machine.begin(Some("t".to_owned())));
    assert!(b.seq() > a.seq());
}

#[test]
fn begin_with_same_token_keeps_current_user() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("t".to_owned())));
    machine.complete(&ticket, Ok(user("u1", Role::User)));
    machine.begin(Some("t".to_owned()));
    assert_eq!(machine.state().user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert!(machine.state().loading);
}

#[test]
fn begin_with_new_token_drops_previous_user() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("old".to_owned())));
    machine.complete(&ticket, Ok(user("u1", Role::User)));
    machine.begin(Some("new".to_owned()));
    assert_eq!(machine.state().user, None);
    assert_eq!(machine.state().token.as_deref(), Some("new"));
}

#[test]
fn begin_without_token_clears_authenticated_user() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("t".to_owned())));
    machine.complete(&ticket, Ok(user("u1", Role::User)));
    machine.begin(None);
    assert_eq!(machine.state().user, None);
    assert_eq!(machine.state().token, None);
    assert!(!machine.state().loading);
}

// =============================================================================
// SessionMachine::complete
// =============================================================================

#[test]
fn complete_success_authenticates() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("t".to_owned())));
    assert_eq!(machine.complete(&ticket, Ok(user("u1", Role::Admin))), Completion::Authenticated);
    let state = machine.state();
    assert_eq!(state.phase(), AuthPhase::Authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.role), Some(Role::Admin));
    assert_eq!(state.token.as_deref(), Some("t"));
}

#[test]
fn complete_failure_signs_out_with_notice() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("t".to_owned())));
    assert_eq!(
        machine.complete(&ticket, Err(AuthError::Rejected(401))),
        Completion::Rejected(AuthError::Rejected(401))
    );
    let state = machine.state();
    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
    assert_eq!(state.token, None);
    assert_eq!(state.notice, Some(SessionNotice::Expired));
}

#[test]
fn complete_success_clears_previous_notice() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("bad".to_owned())));
    machine.complete(&ticket, Err(AuthError::Rejected(401)));
    let ticket = ticket_of(machine.begin(Some("good".to_owned())));
    machine.complete(&ticket, Ok(user("u1", Role::User)));
    assert_eq!(machine.state().notice, None);
}

#[test]
fn notice_survives_a_tokenless_begin() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("bad".to_owned())));
    machine.complete(&ticket, Err(AuthError::Transport("offline".to_owned())));
    machine.begin(None);
    assert_eq!(machine.state().notice, Some(SessionNotice::Expired));
}

#[test]
fn stale_completion_is_ignored_when_newer_finished_first() {
    let mut machine = SessionMachine::new();
    let older = ticket_of(machine.begin(Some("t".to_owned())));
    let newer = ticket_of(machine.begin(Some("t".to_owned())));

    assert_eq!(machine.complete(&newer, Ok(user("fresh", Role::SuperAdmin))), Completion::Authenticated);
    assert_eq!(machine.complete(&older, Ok(user("stale", Role::User))), Completion::Stale);
    assert_eq!(machine.state().user.as_ref().map(|u| u.id.as_str()), Some("fresh"));
}

#[test]
fn stale_failure_does_not_sign_out() {
    let mut machine = SessionMachine::new();
    let older = ticket_of(machine.begin(Some("t".to_owned())));
    let newer = ticket_of(machine.begin(Some("t".to_owned())));
    machine.complete(&newer, Ok(user("u1", Role::User)));

    assert_eq!(machine.complete(&older, Err(AuthError::Rejected(401))), Completion::Stale);
    assert!(machine.state().is_authenticated());
    assert_eq!(machine.state().notice, None);
}

#[test]
fn older_completion_while_newer_pending_keeps_loading() {
    let mut machine = SessionMachine::new();
    let older = ticket_of(machine.begin(Some("t".to_owned())));
    let _newer = ticket_of(machine.begin(Some("t".to_owned())));
    assert_eq!(machine.complete(&older, Ok(user("u1", Role::User))), Completion::Stale);
    assert!(machine.state().loading);
}

// =============================================================================
// SessionMachine::reset
// =============================================================================

#[test]
fn reset_signs_out_from_authenticated() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("t".to_owned())));
    machine.complete(&ticket, Ok(user("u1", Role::User)));
    machine.reset();
    assert_eq!(machine.state(), &SessionState::signed_out());
}

#[test]
fn reset_supersedes_in_flight_resolution() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("t".to_owned())));
    machine.reset();
    assert_eq!(machine.complete(&ticket, Ok(user("u1", Role::User))), Completion::Stale);
    assert_eq!(machine.state().phase(), AuthPhase::Unauthenticated);
}

#[test]
fn reset_clears_notice() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("t".to_owned())));
    machine.complete(&ticket, Err(AuthError::Rejected(403)));
    machine.reset();
    assert_eq!(machine.state().notice, None);
}

#[test]
fn dismiss_notice_only_touches_notice() {
    let mut machine = SessionMachine::new();
    let ticket = ticket_of(machine.begin(Some("t".to_owned())));
    machine.complete(&ticket, Err(AuthError::Rejected(401)));
    machine.dismiss_notice();
    assert_eq!(machine.state(), &SessionState::signed_out());
}
