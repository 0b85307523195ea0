//! End-to-end flow over the real infrastructure adapters: file-backed
//! preferences, atomic file sink, tempdir destination.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local};

use pf_app::usecases::smart_paste::SmartPaste;
use pf_core::pasteboard::PasteboardSnapshot;
use pf_core::ports::{
    AlertPort, ClockPort, FolderResolveError, FrontmostFolderPort, PasteboardPort, PreferencesPort,
    UserDirsPort,
};
use pf_core::settings::{SaveLocation, Settings};
use pf_core::smartpaste::SmartPasteOutcome;
use pf_infra::{AtomicFileSink, FilePreferencesRepository};

struct TextPasteboard(String);

impl PasteboardPort for TextPasteboard {
    fn snapshot(&self) -> anyhow::Result<PasteboardSnapshot> {
        Ok(PasteboardSnapshot {
            formats: vec!["public.utf8-plain-text".to_string()],
            text: Some(self.0.clone()),
            ..Default::default()
        })
    }
}

struct NoBrowser;

impl FrontmostFolderPort for NoBrowser {
    fn is_file_browser_frontmost(&self) -> bool {
        false
    }

    fn frontmost_folder(&self) -> Result<PathBuf, FolderResolveError> {
        Err(FolderResolveError::Unavailable("not frontmost".to_string()))
    }
}

struct FixedDir(PathBuf);

impl UserDirsPort for FixedDir {
    fn dir_for(&self, _location: SaveLocation) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

struct SilentAlerts;

impl AlertPort for SilentAlerts {
    fn automation_permission_prompt(&self) {}
    fn write_permission_failure(&self, _path: &std::path::Path) {}
}

struct WallClock;

impl ClockPort for WallClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[tokio::test]
async fn writes_a_text_file_and_persists_the_counter() {
    let dest = tempfile::tempdir().unwrap();
    let config = tempfile::tempdir().unwrap();
    let prefs_path = config.path().join("preferences.json");

    let mut settings = Settings::default();
    settings.templates.text = "Clip {counter}".to_string();
    let repo = Arc::new(FilePreferencesRepository::new(&prefs_path));
    repo.save(&settings).await.unwrap();

    let usecase = SmartPaste::new(
        Arc::new(TextPasteboard("pasted body".to_string())),
        Arc::new(NoBrowser),
        Arc::new(FixedDir(dest.path().to_path_buf())),
        repo.clone(),
        Arc::new(AtomicFileSink),
        Arc::new(SilentAlerts),
        Arc::new(WallClock),
    );

    let outcome = usecase.execute().await;
    let expected = dest.path().join("Clip 1.txt");
    assert_eq!(
        outcome,
        SmartPasteOutcome::Written {
            kind: pf_core::smartpaste::ContentKind::Text,
            path: expected.clone(),
        }
    );
    assert_eq!(std::fs::read_to_string(&expected).unwrap(), "pasted body");

    // The counter advanced on disk, visible to a fresh repository.
    let reloaded = FilePreferencesRepository::new(&prefs_path)
        .load()
        .await
        .unwrap();
    assert_eq!(reloaded.counters.text, 1);
}
