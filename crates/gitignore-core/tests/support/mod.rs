#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use gitignore_core::cache::{CacheLayout, RemoteSpec, TemplateCache};
use gitignore_core::error::SyncError;
use gitignore_core::git::Synchronizer;

pub const TEST_REMOTE: &str = "https://example.invalid/templates.git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCall {
    Clone { url: String, dest: PathBuf },
    Pull { dest: PathBuf, branch: String },
}

/// In-memory stand-in for git. A clone materializes `templates/` with the
/// seeded files.
#[derive(Debug, Clone, Default)]
pub struct FakeSynchronizer {
    calls: Rc<RefCell<Vec<SyncCall>>>,
    seed: Vec<(String, String)>,
    fail: bool,
}

impl FakeSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: &[(&str, &str)]) -> Self {
        Self {
            seed: templates
                .iter()
                .map(|(name, content)| (name.to_string(), content.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SyncCall> {
        self.calls.borrow().clone()
    }

    fn failure(command: &str) -> SyncError {
        SyncError::Command {
            command: command.to_string(),
            status: "exit status: 128".to_string(),
            stderr: "fatal: unable to access remote".to_string(),
        }
    }
}

impl Synchronizer for FakeSynchronizer {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), SyncError> {
        self.calls.borrow_mut().push(SyncCall::Clone {
            url: url.to_string(),
            dest: dest.to_path_buf(),
        });
        if self.fail {
            return Err(Self::failure("clone"));
        }
        let templates_dir = dest.join("templates");
        fs::create_dir_all(&templates_dir).expect("create_dir_all should succeed");
        for (name, content) in &self.seed {
            fs::write(templates_dir.join(format!("{name}.gitignore")), content)
                .expect("write should succeed");
        }
        Ok(())
    }

    fn pull(&self, dest: &Path, branch: &str) -> Result<(), SyncError> {
        self.calls.borrow_mut().push(SyncCall::Pull {
            dest: dest.to_path_buf(),
            branch: branch.to_string(),
        });
        if self.fail {
            return Err(Self::failure("pull"));
        }
        Ok(())
    }
}

pub fn cache_with(root: &Path, synchronizer: &FakeSynchronizer) -> TemplateCache {
    TemplateCache::new(
        CacheLayout::new(root),
        RemoteSpec::new(TEST_REMOTE),
        Box::new(synchronizer.clone()),
    )
}

/// Write `<name>.gitignore` files into `dir`, creating it.
pub fn write_templates(dir: &Path, templates: &[(&str, &str)]) {
    fs::create_dir_all(dir).expect("create_dir_all should succeed");
    for (name, content) in templates {
        fs::write(dir.join(format!("{name}.gitignore")), content).expect("write should succeed");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Records writes to both standard streams in the order they happen.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    events: Rc<RefCell<Vec<(Stream, Vec<u8>)>>>,
}

impl Transcript {
    pub fn writer(&self, stream: Stream) -> TranscriptWriter {
        TranscriptWriter {
            stream,
            events: Rc::clone(&self.events),
        }
    }

    pub fn bytes(&self, stream: Stream) -> Vec<u8> {
        self.events
            .borrow()
            .iter()
            .filter(|(s, _)| *s == stream)
            .flat_map(|(_, bytes)| bytes.clone())
            .collect()
    }

    pub fn text(&self, stream: Stream) -> String {
        String::from_utf8(self.bytes(stream)).expect("output should be utf-8")
    }

    /// Streams in write order, with consecutive writes merged.
    pub fn order(&self) -> Vec<Stream> {
        let mut order: Vec<Stream> = Vec::new();
        for (stream, bytes) in self.events.borrow().iter() {
            if !bytes.is_empty() && order.last() != Some(stream) {
                order.push(*stream);
            }
        }
        order
    }
}

pub struct TranscriptWriter {
    stream: Stream,
    events: Rc<RefCell<Vec<(Stream, Vec<u8>)>>>,
}

impl Write for TranscriptWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.events.borrow_mut().push((self.stream, buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
