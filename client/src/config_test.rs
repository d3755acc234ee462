use super::*;

#[test]
fn missing_override_selects_local() {
    assert_eq!(ApiEnvironment::from_override(None), ApiEnvironment::Local);
    assert_eq!(ApiEnvironment::Local.base_url(), "http://localhost:3000/api");
}

#[test]
fn blank_override_selects_local() {
    assert_eq!(ApiEnvironment::from_override(Some("   ")), ApiEnvironment::Local);
}

#[test]
fn hosted_override_strips_trailing_slash() {
    let env = ApiEnvironment::from_override(Some("https://blog.example.test/api/"));
    assert_eq!(env, ApiEnvironment::Hosted("https://blog.example.test/api/"));
    assert_eq!(env.base_url(), "https://blog.example.test/api");
}
