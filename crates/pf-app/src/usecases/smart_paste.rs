//! Use case that reacts to the global smart-paste shortcut.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use pf_core::filename::{self, TemplateContext};
use pf_core::pasteboard::PasteboardSnapshot;
use pf_core::ports::{
    AlertPort, ClockPort, FileSinkPort, FolderResolveError, FrontmostFolderPort, PasteboardPort,
    PreferencesPort, UserDirsPort,
};
use pf_core::settings::Settings;
use pf_core::smartpaste::{ContentKind, SkipReason, SmartPasteOutcome};

/// Use case behind the global shortcut: inspect the pasteboard once and
/// conditionally write one file.
///
/// ## Responsibility
///
/// - Decide, in strict order, whether the gesture belongs to the native
///   paste behavior (file URLs), an image file, a text file, or nothing
/// - Resolve the destination folder (frontmost file-browser folder, or
///   the configured default)
/// - Advance the per-kind counter, expand the filename template, and
///   write the file through the sink
///
/// ## What this use case does NOT do
///
/// - Register the shortcut or touch the OS pasteboard directly
/// - Perform any scripting, dialog, or filesystem I/O itself
///
/// All of that is delegated to the injected ports, which keeps the
/// decision procedure deterministic under test.
///
/// ## Typical Flow
///
/// ```text
/// Global shortcut
///   → hotkey listener (platform)
///   → SmartPaste::execute (this use case)
///   → FileSinkPort::write
/// ```
pub struct SmartPaste {
    pasteboard: Arc<dyn PasteboardPort>,
    folder: Arc<dyn FrontmostFolderPort>,
    user_dirs: Arc<dyn UserDirsPort>,
    preferences: Arc<dyn PreferencesPort>,
    sink: Arc<dyn FileSinkPort>,
    alerts: Arc<dyn AlertPort>,
    clock: Arc<dyn ClockPort>,

    /// Whether the last folder resolution failed on authorization.
    /// Keeps later non-authorization failures from being misread.
    automation_denied: AtomicBool,

    /// The automation prompt fires at most once per process lifetime.
    automation_prompted: AtomicBool,
}

impl SmartPaste {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pasteboard: Arc<dyn PasteboardPort>,
        folder: Arc<dyn FrontmostFolderPort>,
        user_dirs: Arc<dyn UserDirsPort>,
        preferences: Arc<dyn PreferencesPort>,
        sink: Arc<dyn FileSinkPort>,
        alerts: Arc<dyn AlertPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            pasteboard,
            folder,
            user_dirs,
            preferences,
            sink,
            alerts,
            clock,
            automation_denied: AtomicBool::new(false),
            automation_prompted: AtomicBool::new(false),
        }
    }

    pub fn last_resolution_was_automation_denied(&self) -> bool {
        self.automation_denied.load(Ordering::SeqCst)
    }

    /// Execute one smart-paste invocation.
    ///
    /// Never returns an error: every failure mode collapses into a
    /// [`SmartPasteOutcome`] and the daemon keeps running.
    pub async fn execute(&self) -> SmartPasteOutcome {
        let span = info_span!("usecase.smart_paste.execute");

        async {
            let snapshot = match self.pasteboard.snapshot() {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!(error = %e, "pasteboard read failed");
                    return SmartPasteOutcome::Skipped(SkipReason::NothingEligible);
                }
            };

            if snapshot.contains_file_urls() {
                debug!("pasteboard contains file URLs, leaving the gesture to the native paste");
                return SmartPasteOutcome::Skipped(SkipReason::FileUrlsOnPasteboard);
            }

            let settings = match self.preferences.load().await {
                Ok(settings) => settings,
                Err(e) => {
                    error!(error = %e, "preferences unavailable");
                    return SmartPasteOutcome::Skipped(SkipReason::PreferencesUnavailable);
                }
            };

            // Image takes priority over text.
            if settings.behavior.image_enabled {
                if let Some(image) = snapshot.image.clone() {
                    debug!("image detected on pasteboard");
                    return self
                        .create_file(ContentKind::Image, image.bytes(), &snapshot, &settings)
                        .await;
                }
            }

            if settings.behavior.text_enabled {
                if let Some(text) = snapshot.text.clone() {
                    debug!("text detected on pasteboard");
                    return self
                        .create_file(ContentKind::Text, text.as_bytes(), &snapshot, &settings)
                        .await;
                }
            }

            debug!("no matching pasteboard content (no image/text or behaviors disabled)");
            SmartPasteOutcome::Skipped(SkipReason::NothingEligible)
        }
        .instrument(span)
        .await
    }

    async fn create_file(
        &self,
        kind: ContentKind,
        bytes: &[u8],
        snapshot: &PasteboardSnapshot,
        settings: &Settings,
    ) -> SmartPasteOutcome {
        let folder = match self.resolve_destination(settings) {
            Ok(folder) => folder,
            Err(reason) => return SmartPasteOutcome::Skipped(reason),
        };

        // Incremented before the write and never rolled back, so values
        // stay monotonic even across failed attempts.
        let counter = match self.preferences.next_counter(kind).await {
            Ok(counter) => counter,
            Err(e) => {
                error!(error = %e, "could not advance file counter");
                return SmartPasteOutcome::Skipped(SkipReason::PreferencesUnavailable);
            }
        };

        let mut ctx = TemplateContext::new(self.clock.now(), counter);
        match kind {
            ContentKind::Image => {
                ctx = ctx.with_source_name(snapshot.inferred_image_name());
            }
            ContentKind::Text => {
                if let Some(text) = &snapshot.text {
                    ctx = ctx.with_source_text(text.clone());
                }
            }
        }

        let base_name = filename::expand(settings.templates.for_kind(kind), &ctx);
        let path = folder.join(format!("{base_name}.{}", kind.extension()));

        match self.sink.write(&path, bytes) {
            Ok(()) => {
                info!(%kind, path = %path.display(), "smart paste wrote file");
                SmartPasteOutcome::Written { kind, path }
            }
            Err(e) => {
                error!(%kind, error = %e, "file write failed");
                if e.is_permission_denied() {
                    self.alerts.write_permission_failure(&path);
                }
                SmartPasteOutcome::Skipped(SkipReason::WriteFailed)
            }
        }
    }

    /// Destination-folder policy, shared by the image and text paths.
    ///
    /// An authorization denial from the file browser aborts outright;
    /// falling back to the default folder would silently save somewhere
    /// the user is not looking at.
    fn resolve_destination(&self, settings: &Settings) -> Result<PathBuf, SkipReason> {
        if self.folder.is_file_browser_frontmost() {
            debug!("file browser frontmost, resolving its folder");
            match self.folder.frontmost_folder() {
                Ok(path) => {
                    self.automation_denied.store(false, Ordering::SeqCst);
                    info!(path = %path.display(), "using frontmost file-browser folder");
                    return Ok(path);
                }
                Err(FolderResolveError::AutomationDenied) => {
                    self.automation_denied.store(true, Ordering::SeqCst);
                    if !self.automation_prompted.swap(true, Ordering::SeqCst) {
                        self.alerts.automation_permission_prompt();
                    }
                    return Err(SkipReason::AutomationDenied);
                }
                Err(FolderResolveError::Unavailable(reason)) => {
                    self.automation_denied.store(false, Ordering::SeqCst);
                    debug!(%reason, "frontmost folder unavailable, trying default location");
                }
            }
        }

        if !settings.save.default_save_enabled {
            debug!("default save location disabled, aborting");
            return Err(SkipReason::NoDestination);
        }

        match self.user_dirs.dir_for(settings.save.location) {
            Some(dir) => {
                info!(path = %dir.display(), location = settings.save.location.display_name(), "using default save location");
                Ok(dir)
            }
            None => {
                warn!(
                    location = settings.save.location.display_name(),
                    "default save location could not be resolved"
                );
                Err(SkipReason::NoDestination)
            }
        }
    }
}
