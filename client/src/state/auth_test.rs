use super::*;

#[test]
fn unresolved_state_is_loading_without_user() {
    let state = unresolved_state();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn new_context_starts_unresolved() {
    Owner::new().with(|| {
        let ctx = AuthContext::new();
        assert_eq!(ctx.state.get_untracked(), unresolved_state());
        assert!(ctx.session.state().user.is_none());
    });
}

#[test]
fn logout_publishes_cleared_state() {
    Owner::new().with(|| {
        let ctx = AuthContext::new();
        ctx.logout();
        assert_eq!(ctx.state.get_untracked(), AuthState::default());
    });
}
