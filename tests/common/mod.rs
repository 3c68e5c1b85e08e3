//! Shared testing utilities for ztp tests.

use assert_cmd::Command;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `ztp` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ztp").expect("Failed to locate ztp binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

/// Decode a base64 payload into text.
#[allow(dead_code)]
pub fn decode_payload(payload: &str) -> String {
    let bytes = STANDARD.decode(payload.trim()).expect("payload should be valid base64");
    String::from_utf8(bytes).expect("payload should be UTF-8")
}

/// A deployment description covering every field.
#[allow(dead_code)]
pub const WEB_SERVER_DESCRIPTION: &str = r#"{
  "id": "web_server",
  "name": "Web Server",
  "description": "nginx front end",
  "parameters": [{"name": "ServerName", "description": "Public host name"}],
  "update_packages": true,
  "upgrade_packages": false,
  "packages": ["nginx"],
  "commands": ["echo {{ .ServerName }}"],
  "files": [{"path": "/etc/motd", "content": "Welcome to {{ .ServerName }}"}]
}"#;
