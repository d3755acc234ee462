use super::*;

#[test]
fn validate_sign_up_trims_name_and_email() {
    assert_eq!(
        validate_sign_up(" ada ", " ada@example.com ", "pw"),
        Ok(SignUpRequest { username: "ada".to_owned(), email: "ada@example.com".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_sign_up_rejects_any_blank_field() {
    assert_eq!(validate_sign_up("", "a@b.c", "pw"), Err("Please fill out all fields."));
    assert_eq!(validate_sign_up("ada", "  ", "pw"), Err("Please fill out all fields."));
    assert_eq!(validate_sign_up("ada", "a@b.c", ""), Err("Please fill out all fields."));
}
