// src/viewer.rs
//! Launching the platform document viewer on a generated file.

use log::info;
use std::io;
use std::path::Path;
use std::process::Command;

/// Opens a document for the user after generation.
///
/// Implementations report failures to the caller; callers treat a viewer
/// failure as a warning, never as a failed run.
pub trait Viewer: Send + Sync {
    fn open(&self, path: &Path) -> io::Result<()>;
    fn name(&self) -> &'static str;
}

/// Launches the platform's default opener without waiting for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer;

impl SystemViewer {
    pub fn new() -> Self {
        Self
    }

    fn opener() -> (&'static str, &'static [&'static str]) {
        if cfg!(target_os = "windows") {
            // `start` treats its first quoted argument as a window title.
            ("cmd", &["/C", "start", ""])
        } else if cfg!(target_os = "macos") {
            ("open", &[])
        } else {
            ("xdg-open", &[])
        }
    }
}

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> io::Result<()> {
        let (program, args) = Self::opener();
        info!("Opening '{}' with '{}'", path.display(), program);
        Command::new(program).args(args).arg(path).spawn()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "system-viewer"
    }
}
