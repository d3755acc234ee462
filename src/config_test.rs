use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig { host: DEFAULT_HOST, port: DEFAULT_PORT, pkg_dir: None });
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_overrides() {
    let cfg =
        HostConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("SITE_PKG_DIR", "dist/pkg")]))
            .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.pkg_dir, Some(PathBuf::from("dist/pkg")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", " "), ("PORT", ""), ("SITE_PKG_DIR", "")])).unwrap();
    assert_eq!(cfg, HostConfig { host: DEFAULT_HOST, port: DEFAULT_PORT, pkg_dir: None });
}

#[test]
fn rejects_out_of_range_port() {
    assert_eq!(
        HostConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort { value: "70000".to_owned() })
    );
}

#[test]
fn rejects_hostname_in_host() {
    assert_eq!(
        HostConfig::from_lookup(lookup(&[("HOST", "localhost")])),
        Err(ConfigError::InvalidHost { value: "localhost".to_owned() })
    );
}

#[test]
fn from_env_reads_process_environment() {
    // Only this test touches the process environment.
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("HOST");
        std::env::remove_var("SITE_PKG_DIR");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    assert_eq!(cfg.host, DEFAULT_HOST);

    unsafe { std::env::remove_var("PORT") };
}
