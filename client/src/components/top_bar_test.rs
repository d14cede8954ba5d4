use super::*;
use crate::net::types::UserRole;

fn user(name: Option<&str>, role: UserRole) -> User {
    User {
        id: "u1".to_owned(),
        org_id: "o1".to_owned(),
        email: "a@b.com".to_owned(),
        role,
        name: name.map(str::to_owned),
        created_at: None,
    }
}

#[test]
fn account_label_with_name() {
    assert_eq!(account_label(&user(Some("Avery"), UserRole::Admin)), "Avery · Admin");
}

#[test]
fn account_label_falls_back_to_email() {
    assert_eq!(account_label(&user(None, UserRole::Auditor)), "a@b.com · Auditor");
}
