#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

use crate::util::version::{version_label, APP_NAME};

/// Sets a variable only when the user has not chosen a value already.
fn default_env(key: &str, value: &str) {
    if std::env::var_os(key).is_none() {
        std::env::set_var(key, value);
    }
}

fn main() {
    // Some Wayland drivers crash on WebKit's explicit-sync DMABUF path.
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        default_env("WGPU_BACKEND", "gl");
        default_env("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop! {
        DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(format!("{APP_NAME} {}", version_label()))
                .with_inner_size(LogicalSize::new(1360.0, 900.0))
                .with_min_inner_size(LogicalSize::new(960.0, 640.0)),
        )
    });

    #[cfg(not(feature = "desktop"))]
    tracing::debug!(app = APP_NAME, version = %version_label(), "launching");

    builder.launch(app::App);
}
