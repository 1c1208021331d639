//! Build artifacts and the resolved state of one build.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::build_id::BuildId;

/// One named file stored under a build identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// The submitted source text.
    Source,
    /// Standard output of the compiler.
    Stdout,
    /// Standard error of the compiler.
    Stderr,
    /// The compiled document.
    Document,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Source,
        ArtifactKind::Stdout,
        ArtifactKind::Stderr,
        ArtifactKind::Document,
    ];

    /// Object name of the artifact inside its build.
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Source => "input.saty",
            ArtifactKind::Stdout => "stdout.txt",
            ArtifactKind::Stderr => "stderr.txt",
            ArtifactKind::Document => "document.pdf",
        }
    }

    /// Path segments of the artifact relative to the object-store endpoint.
    ///
    /// The build identifier is one opaque segment, whatever it contains.
    pub fn segments(self, build_id: &BuildId) -> [&str; 2] {
        [build_id.as_str(), self.file_name()]
    }

    /// Whether only the presence of the artifact is checked.
    pub fn is_probed(self) -> bool {
        self == ArtifactKind::Document
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Resolved state of one build.
///
/// Text artifacts are either complete or `None`; `None` means the artifact
/// was not found or could not be fetched, while an empty artifact is
/// `Some(String::new())`. `document_url` is always set, even when the
/// document does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSet {
    pub source: Option<String>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub document_exists: bool,
    pub document_url: String,
}

impl ArtifactSet {
    /// An artifact set with nothing present.
    pub fn absent(document_url: impl Into<String>) -> Self {
        Self {
            source: None,
            stdout: None,
            stderr: None,
            document_exists: false,
            document_url: document_url.into(),
        }
    }

    /// True when none of the four artifacts could be retrieved.
    ///
    /// Callers can use this to tell a build that never existed from one that
    /// exists but produced no document.
    pub fn is_empty(&self) -> bool {
        !self.document_exists
            && self.source.is_none()
            && self.stdout.is_none()
            && self.stderr.is_none()
    }

    /// Whether a compiled document is available.
    pub fn compiled(&self) -> bool {
        self.document_exists
    }

    /// Whether the given artifact is present.
    pub fn contains(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Source => self.source.is_some(),
            ArtifactKind::Stdout => self.stdout.is_some(),
            ArtifactKind::Stderr => self.stderr.is_some(),
            ArtifactKind::Document => self.document_exists,
        }
    }
}

impl fmt::Display for ArtifactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let presence = if self.document_exists {
            "available"
        } else {
            "missing"
        };
        writeln!(f, "Document ({presence}): {}", self.document_url)?;
        match &self.source {
            Some(source) => writeln!(f, "Source: {} bytes", source.len())?,
            None => writeln!(f, "Source: absent")?,
        }
        for (name, text) in [("stdout", &self.stdout), ("stderr", &self.stderr)] {
            match text {
                Some(text) => {
                    writeln!(f, "--- {name} ---")?;
                    write!(f, "{text}")?;
                    if !text.is_empty() && !text.ends_with('\n') {
                        writeln!(f)?;
                    }
                }
                None => writeln!(f, "--- {name} (absent) ---")?,
            }
        }
        Ok(())
    }
}
