use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use clipboard_rs::{common::RustImage, Clipboard, ClipboardContext, ContentFormat};
use tracing::{debug, debug_span};

use pf_core::pasteboard::{PasteboardSnapshot, PngImage};
use pf_core::ports::PasteboardPort;

/// Live system pasteboard behind clipboard-rs.
pub struct SystemPasteboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl SystemPasteboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn read(ctx: &mut ClipboardContext) -> Result<PasteboardSnapshot> {
        let formats = map_clipboard_err(ctx.available_formats())?;

        let mut snapshot = PasteboardSnapshot {
            formats,
            ..Default::default()
        };

        if ctx.has(ContentFormat::Files) {
            if let Ok(files) = ctx.get_files() {
                snapshot.file_urls = files.iter().map(|f| file_url_to_path(f)).collect();
            }
        }

        if ctx.has(ContentFormat::Image) {
            if let Ok(img) = ctx.get_image() {
                if let Ok(png) = img.to_png() {
                    snapshot.image = Some(PngImage::new(png.get_bytes().to_vec()));
                }
            }
        }

        if ctx.has(ContentFormat::Text) {
            if let Ok(text) = ctx.get_text() {
                snapshot.text = Some(text);
            }
        }

        Ok(snapshot)
    }
}

/// clipboard-rs reports file entries as `file://` URL strings.
fn file_url_to_path(url: &str) -> PathBuf {
    let stripped = url
        .strip_prefix("file://")
        .map(|rest| rest.trim_start_matches("localhost"))
        .unwrap_or(url);
    PathBuf::from(stripped)
}

impl PasteboardPort for SystemPasteboard {
    fn snapshot(&self) -> Result<PasteboardSnapshot> {
        let span = debug_span!("platform.read_pasteboard");
        span.in_scope(|| {
            let mut ctx = self.inner.lock().unwrap();
            let snapshot = Self::read(&mut ctx)?;

            debug!(
                formats = snapshot.formats.len(),
                file_urls = snapshot.file_urls.len(),
                has_image = snapshot.image.is_some(),
                has_text = snapshot.text.is_some(),
                "Captured pasteboard snapshot"
            );

            Ok(snapshot)
        })
    }
}
