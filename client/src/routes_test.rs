use super::*;

fn make_user(is_admin: bool) -> CurrentUser {
    CurrentUser { id: "u-1".to_owned(), username: "ada".to_owned(), is_admin, ..CurrentUser::default() }
}

// =============================================================
// Admin guard
// =============================================================

#[test]
fn guard_rejects_missing_principal() {
    assert!(!can_enter_admin(None));
}

#[test]
fn guard_rejects_non_admin() {
    assert!(!can_enter_admin(Some(&make_user(false))));
}

#[test]
fn guard_accepts_admin() {
    assert!(can_enter_admin(Some(&make_user(true))));
}

// =============================================================
// Router guard decision
// =============================================================

#[test]
fn guard_is_pending_until_rehydrated() {
    assert_eq!(admin_guard(false, None), None);
    assert_eq!(admin_guard(false, Some(&make_user(true))), None);
}

#[test]
fn rehydrated_non_admin_is_turned_away() {
    assert_eq!(admin_guard(true, Some(&make_user(false))), Some(false));
    assert_eq!(admin_guard(true, None), Some(false));
}

#[test]
fn rehydrated_admin_is_let_in() {
    assert_eq!(admin_guard(true, Some(&make_user(true))), Some(true));
}

#[test]
fn guard_redirect_lands_home() {
    assert_eq!(REDIRECT_PATH, HOME_PATH);
}

#[test]
fn admin_create_path_formats_id() {
    assert_eq!(admin_create_path("new"), "/admin/create/new");
}
