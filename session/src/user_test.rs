use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_parse_accepts_known_wire_values() {
    assert_eq!(Role::parse("user"), Some(Role::User));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("superadmin"), Some(Role::SuperAdmin));
}

#[test]
fn role_parse_is_exact() {
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("super_admin"), None);
    assert_eq!(Role::parse(" admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_display_matches_wire_value() {
    for role in [Role::User, Role::Admin, Role::SuperAdmin] {
        assert_eq!(role.to_string(), role.as_str());
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"superadmin\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

// =============================================================================
// User
// =============================================================================

#[test]
fn user_deserializes_without_avatar() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","email":"a@b.com","name":"Ada","role":"admin"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.avatar, None);
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn user_deserializes_null_avatar() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","email":"a@b.com","name":"Ada","avatar":null,"role":"user"}"#)
            .unwrap();
    assert_eq!(user.avatar, None);
}

#[test]
fn user_rejects_unknown_role() {
    let result: Result<User, _> =
        serde_json::from_str(r#"{"id":"u1","email":"a@b.com","name":"Ada","role":"owner"}"#);
    assert!(result.is_err());
}

#[test]
fn user_ignores_extra_fields() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","email":"a@b.com","name":"Ada","role":"user","plan":"pro","links":42}"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::User);
}
