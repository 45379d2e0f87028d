//! Tests for plugin setup: log target registration and template roots.

mod common;

use common::{RecordingBackend, SharedBuf};
use plugin_log::backend::{Backend, DEFAULT_CHANNEL, Dispatcher, StreamTarget};
use plugin_log::config::TargetConfig;
use plugin_log::context::Context;
use plugin_log::fmt::LineFormatter;
use plugin_log::runtime::ExecutionMode;
use plugin_log::{Plugin, TemplateRoots, Tier};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn target_config(dir: &TempDir) -> TargetConfig {
    TargetConfig {
        base_dir: dir.path().to_string_lossy().into_owned(),
        ..TargetConfig::default()
    }
}

#[test]
fn production_target_keeps_warning_and_above() {
    let dir = TempDir::new().unwrap();
    let plugin = Plugin::new("shop", dir.path());
    let mut dispatcher = Dispatcher::new();

    assert!(plugin.register_log_target(&mut dispatcher, &target_config(&dir)));
    assert_eq!(plugin.threshold(), Tier::Warning);

    let dispatcher = Arc::new(dispatcher);
    let logger = plugin
        .logger(dispatcher.clone())
        .execution(ExecutionMode::Request)
        .build();
    logger.info("quiet", Context::new()).unwrap();
    logger.warning("loud", Context::new()).unwrap();
    dispatcher.flush().unwrap();

    let content = fs::read_to_string(dir.path().join("shop.log")).unwrap();
    assert!(content.contains("[WARNING] [shop] loud\n"));
    assert!(!content.contains("quiet"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn development_target_keeps_everything_pretty() {
    let dir = TempDir::new().unwrap();
    let plugin = Plugin::new("shop", dir.path()).dev_mode(true);
    let mut dispatcher = Dispatcher::new();
    plugin.register_log_target(&mut dispatcher, &target_config(&dir));

    let dispatcher = Arc::new(dispatcher);
    let logger = plugin
        .logger(dispatcher.clone())
        .execution(ExecutionMode::Request)
        .build();
    logger.debug("cache hit", Context::new()).unwrap();
    logger.error("broken", Context::new()).unwrap();

    let content = fs::read_to_string(dir.path().join("shop.log")).unwrap();
    assert!(content.contains("[TRACE] [shop] cache hit\n[] "));
    assert!(content.contains("[ERROR] [shop] broken\n{\n  \"queryParams\": {}"));
}

#[test]
fn built_target_follows_config_and_mode() {
    let dir = TempDir::new().unwrap();
    let config = TargetConfig {
        timestamp_format: "%H:%M".to_string(),
        ..target_config(&dir)
    };

    let prod = Plugin::new("shop", dir.path()).log_target(&config).unwrap();
    assert_eq!(prod.name(), "shop");
    assert_eq!(prod.threshold(), Tier::Warning);
    assert!(!prod.line_formatter().is_pretty());
    assert!(!prod.line_formatter().includes_stacktraces());

    let dev = Plugin::new("shop", dir.path())
        .dev_mode(true)
        .log_target(&config)
        .unwrap();
    assert_eq!(dev.threshold(), Tier::Trace);
    assert!(dev.line_formatter().is_pretty());
    assert!(dev.line_formatter().allows_line_breaks());
}

#[test]
fn target_ignores_other_channels() {
    let dir = TempDir::new().unwrap();
    let plugin = Plugin::new("shop", dir.path());
    let mut dispatcher = Dispatcher::new();
    plugin.register_log_target(&mut dispatcher, &target_config(&dir));

    dispatcher.report(Tier::Error, "host problem");

    let content = fs::read_to_string(dir.path().join("shop.log")).unwrap();
    assert!(content.is_empty());
}

#[test]
fn failed_registration_is_reported_once_on_default_channel() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let config = TargetConfig {
        base_dir: blocker.to_string_lossy().into_owned(),
        ..TargetConfig::default()
    };

    let host_log = SharedBuf::new();
    let mut dispatcher = Dispatcher::new().with_target(
        StreamTarget::new("host", host_log.clone())
            .formatter(LineFormatter::new("{level} {channel}: {message}\n")),
    );

    let plugin = Plugin::new("shop", dir.path());
    assert!(!plugin.register_log_target(&mut dispatcher, &config));
    assert_eq!(dispatcher.target_count(), 1);

    let out = host_log.contents();
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with(&format!("ERROR {DEFAULT_CHANNEL}: log target ")));
    assert!(out.contains("shop.log unavailable"));
}

#[test]
fn logger_from_plugin_uses_handle_as_channel() {
    let backend = RecordingBackend::new();
    let plugin = Plugin::new("forms", "/nonexistent");
    let logger = plugin
        .logger(backend.clone())
        .execution(ExecutionMode::Request)
        .build();

    logger.notice("submitted", Context::new()).unwrap();

    assert_eq!(backend.last().channel, "forms");
}

#[test]
fn template_root_registered_when_directory_exists() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("templates")).unwrap();
    let plugin = Plugin::new("shop", dir.path());
    let mut roots = TemplateRoots::new();

    assert!(plugin.register_template_roots(&mut roots));
    assert_eq!(roots.get("shop"), Some(dir.path().join("templates").as_path()));
    assert_eq!(roots.len(), 1);
}

#[test]
fn template_root_skipped_without_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("templates"), "not a dir").unwrap();
    let plugin = Plugin::new("shop", dir.path());
    let mut roots = TemplateRoots::new();

    assert!(!plugin.register_template_roots(&mut roots));
    assert!(roots.is_empty());
}

#[test]
fn template_roots_from_several_plugins() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    fs::create_dir(a.path().join("templates")).unwrap();
    fs::create_dir(b.path().join("templates")).unwrap();
    let mut roots = TemplateRoots::new();

    Plugin::new("shop", a.path()).register_template_roots(&mut roots);
    Plugin::new("forms", b.path()).register_template_roots(&mut roots);

    let handles: Vec<_> = roots.iter().map(|(h, _)| h).collect();
    assert_eq!(handles, ["forms", "shop"]);
}
