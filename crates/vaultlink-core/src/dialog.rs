//! Native dialog provider collaborator.
//!
//! Window and dialog plumbing lives outside the core; the core only needs the
//! three prompts below. Cancellation is represented as `None`/empty, never as
//! an error.

use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Prompts the core asks the platform layer to show.
#[async_trait]
pub trait DialogProvider: Send + Sync {
    /// Ask the user to pick a directory. `None` means cancelled.
    async fn choose_directory(&self, title: &str) -> Result<Option<PathBuf>>;

    /// Ask the user to pick one or more files matching the extension filter
    /// (extensions without leading dot, e.g. `["md", "markdown"]`).
    /// An empty list means cancelled.
    async fn choose_files(&self, title: &str, extensions: &[&str]) -> Result<Vec<PathBuf>>;

    /// Show a message with option buttons; returns the selected option index.
    async fn confirm(&self, message: &str, detail: &str, options: &[&str]) -> Result<usize>;
}

/// Scripted dialog provider for tests and headless flows: answers are queued
/// up front and consumed in order.
#[derive(Default)]
pub struct ScriptedDialogs {
    directories: parking_lot::Mutex<Vec<Option<PathBuf>>>,
    files: parking_lot::Mutex<Vec<Vec<PathBuf>>>,
    confirmations: parking_lot::Mutex<Vec<usize>>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a directory-picker answer (`None` = user cancels).
    pub fn push_directory(&self, answer: Option<PathBuf>) {
        self.directories.lock().push(answer);
    }

    /// Queue a file-picker answer (empty = user cancels).
    pub fn push_files(&self, answer: Vec<PathBuf>) {
        self.files.lock().push(answer);
    }

    /// Queue a confirm answer (option index).
    pub fn push_confirmation(&self, answer: usize) {
        self.confirmations.lock().push(answer);
    }
}

#[async_trait]
impl DialogProvider for ScriptedDialogs {
    async fn choose_directory(&self, _title: &str) -> Result<Option<PathBuf>> {
        let mut queue = self.directories.lock();
        if queue.is_empty() {
            return Ok(None);
        }
        Ok(queue.remove(0))
    }

    async fn choose_files(&self, _title: &str, _extensions: &[&str]) -> Result<Vec<PathBuf>> {
        let mut queue = self.files.lock();
        if queue.is_empty() {
            return Ok(Vec::new());
        }
        Ok(queue.remove(0))
    }

    async fn confirm(&self, _message: &str, _detail: &str, options: &[&str]) -> Result<usize> {
        let mut queue = self.confirmations.lock();
        if queue.is_empty() {
            // Default to the last option, conventionally the safe "Cancel"
            return Ok(options.len().saturating_sub(1));
        }
        Ok(queue.remove(0))
    }
}
