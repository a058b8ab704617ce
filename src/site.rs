use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{DataPaths, SiteConfig};
use crate::constants::{PAGE_FILE_NAME, SESSIONS_DIR, STATIC_DIR, STYLESHEET_FILE_NAME};
use crate::domain::Session;
use crate::error::{Result, SiteError};
use crate::i18n::Translations;
use crate::render::{render_session, RenderContext};
use crate::schedule::SlotTable;
use crate::speakers::SpeakerDirectory;

/// Stylesheet linked from every page, shipped with the binary.
const SESSION_STYLESHEET: &str = include_str!("../static/session.css");

/// All build-time data, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SiteData {
    pub sessions: Vec<Session>,
    pub slots: SlotTable,
    pub speakers: SpeakerDirectory,
}

/// A dangling or ambiguous reference found by [`SiteData::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceProblem {
    MissingSlot { session: String, slot: String },
    MissingSpeaker { session: String, speaker: String },
    DuplicateSession { session: String },
}

impl fmt::Display for ReferenceProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceProblem::MissingSlot { session, slot } => {
                write!(f, "session '{}' references unknown slot '{}'", session, slot)
            }
            ReferenceProblem::MissingSpeaker { session, speaker } => {
                write!(f, "session '{}' references unknown speaker '{}'", session, speaker)
            }
            ReferenceProblem::DuplicateSession { session } => {
                write!(f, "session key '{}' is used more than once", session)
            }
        }
    }
}

impl SiteData {
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let sessions = Self::load_sessions(&paths.sessions)?;
        let slots = SlotTable::load(&paths.slots)?;
        let speakers = SpeakerDirectory::load(&paths.speakers)?;

        info!(
            sessions = sessions.len(),
            slots = slots.len(),
            speakers = speakers.len(),
            "Loaded site data"
        );

        Ok(Self {
            sessions,
            slots,
            speakers,
        })
    }

    /// Sessions come as a JSON array, or a YAML list when the file ends in
    /// `.yaml`/`.yml`.
    pub fn load_sessions<P: AsRef<Path>>(path: P) -> Result<Vec<Session>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let sessions: Vec<Session> = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        Ok(sessions)
    }

    pub fn find_session(&self, key: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.key == key)
    }

    /// Collects every reference problem instead of stopping at the first.
    pub fn check(&self) -> Vec<ReferenceProblem> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for session in &self.sessions {
            if !seen.insert(session.key.as_str()) {
                problems.push(ReferenceProblem::DuplicateSession {
                    session: session.key.clone(),
                });
            }
            if !self.slots.contains(&session.slot) {
                problems.push(ReferenceProblem::MissingSlot {
                    session: session.key.clone(),
                    slot: session.slot.clone(),
                });
            }
            for speaker in session.speaker_keys() {
                if !self.speakers.contains(speaker) {
                    problems.push(ReferenceProblem::MissingSpeaker {
                        session: session.key.clone(),
                        speaker: speaker.clone(),
                    });
                }
            }
        }

        problems
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub pages_written: usize,
    pub cancelled: usize,
    pub stylesheet: PathBuf,
    pub output_dir: PathBuf,
}

pub struct SiteBuilder<'a> {
    data: &'a SiteData,
    site: &'a SiteConfig,
    translations: Translations,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(data: &'a SiteData, site: &'a SiteConfig, translations: Translations) -> Self {
        Self {
            data,
            site,
            translations,
        }
    }

    pub fn context(&self) -> RenderContext<'_> {
        RenderContext {
            slots: &self.data.slots,
            speakers: &self.data.speakers,
            translations: &self.translations,
            site: self.site,
        }
    }

    pub fn render(&self, session: &Session) -> Result<String> {
        render_session(session, &self.context())
    }

    /// Renders every session into `<out>/sessions/<key>/index.html` and writes
    /// the stylesheet to `<out>/static/session.css`. Duplicate session keys are
    /// rejected before anything is written; the first render error aborts the
    /// build.
    pub fn build<P: AsRef<Path>>(&self, out_dir: P) -> Result<BuildReport> {
        let out_dir = out_dir.as_ref();
        self.ensure_unique_keys()?;

        let stylesheet = write_stylesheet(out_dir)?;
        let mut report = BuildReport {
            pages_written: 0,
            cancelled: 0,
            stylesheet,
            output_dir: out_dir.to_path_buf(),
        };

        for session in &self.data.sessions {
            let span = tracing::info_span!("Rendering session", session = %session.key);
            let _enter = span.enter();

            let html = self.render(session)?;
            let path = page_path(out_dir, &session.key)?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, html)?;
            debug!("Wrote {}", path.display());

            report.pages_written += 1;
            if session.cancelled {
                report.cancelled += 1;
            }
        }

        info!(
            pages = report.pages_written,
            cancelled = report.cancelled,
            "Site build finished"
        );
        Ok(report)
    }

    fn ensure_unique_keys(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for session in &self.data.sessions {
            if !seen.insert(session.key.as_str()) {
                return Err(SiteError::DuplicateSession(session.key.clone()));
            }
        }
        Ok(())
    }
}

fn write_stylesheet(out_dir: &Path) -> Result<PathBuf> {
    let static_dir = out_dir.join(STATIC_DIR);
    fs::create_dir_all(&static_dir)?;
    let path = static_dir.join(STYLESHEET_FILE_NAME);
    fs::write(&path, SESSION_STYLESHEET)?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

/// Location of a session page under the output directory. Keys must be a
/// single path segment.
pub fn page_path(out_dir: &Path, session_key: &str) -> Result<PathBuf> {
    let invalid = session_key.is_empty()
        || session_key == "."
        || session_key == ".."
        || session_key.contains(['/', '\\']);
    if invalid {
        return Err(SiteError::InvalidSessionKey(session_key.to_string()));
    }
    Ok(out_dir.join(SESSIONS_DIR).join(session_key).join(PAGE_FILE_NAME))
}
