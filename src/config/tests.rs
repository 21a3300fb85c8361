use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_explicit_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SERATO_TOOLS_CONFIG_PATH", "/tmp/serato-tools-test.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/serato-tools-test.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("serato-tools")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("serato-tools")
            .join("config.toml")
    );
}

#[test]
fn defaults_cover_every_crate_extension() {
    let s = Settings::default();
    assert_eq!(
        s.library.extensions,
        vec!["mp3", "ogg", "alac", "flac", "aif", "wav", "mp4", "m4a"]
    );
    assert_eq!(
        s.library.duplicate_extensions,
        vec!["mp3", "ogg", "flac", "m4a", "mp4"]
    );
    assert_eq!(s.crates.on_bad_track, BadTrackSetting::Skip);
    assert!(s.crates.root_crate.is_empty());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
extensions = ["mp3", "flac"]
include_hidden = true
follow_links = false

[crates]
root_crate = "Library"
on_bad_track = "fail"
columns = ["artist", "song"]
music_dir = "/srv/music"
platform = "macos"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SERATO_TOOLS_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SERATO_TOOLS__CRATES__ROOT_CRATE");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.extensions, vec!["mp3", "flac"]);
    assert!(s.library.include_hidden);
    assert!(!s.library.follow_links);
    // Untouched keys keep their defaults.
    assert_eq!(s.library.duplicate_extensions.len(), 5);
    assert_eq!(s.crates.root_crate, "Library");
    assert_eq!(s.crates.on_bad_track, BadTrackSetting::Abort);
    assert_eq!(s.crates.columns, vec!["artist", "song"]);
    assert_eq!(
        s.crates.music_dir.as_deref(),
        Some(std::path::Path::new("/srv/music"))
    );
    assert_eq!(s.crates.platform.as_deref(), Some("macos"));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[crates]
root_crate = "FromFile"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SERATO_TOOLS_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SERATO_TOOLS__CRATES__ROOT_CRATE", "FromEnv");

    let s = Settings::load().unwrap();
    assert_eq!(s.crates.root_crate, "FromEnv");
}

#[test]
fn validate_rejects_empty_lists_and_unknown_platform() {
    let mut s = Settings::default();
    s.crates.columns = vec![" ".into()];
    assert!(s.validate().unwrap_err().contains("crates.columns"));

    let mut s = Settings::default();
    s.library.extensions.clear();
    assert!(s.validate().unwrap_err().contains("library.extensions"));

    let mut s = Settings::default();
    s.crates.platform = Some("linux".into());
    assert!(s.validate().unwrap_err().contains("crates.platform"));
}

#[test]
fn settings_serialize_to_toml() {
    let text = toml::to_string_pretty(&Settings::default()).unwrap();
    assert!(text.contains("[crates]"));
    assert!(text.contains("on_bad_track = \"skip\""));
    let back: Settings = toml::from_str(&text).unwrap();
    assert_eq!(back.library.extensions, Settings::default().library.extensions);
}
