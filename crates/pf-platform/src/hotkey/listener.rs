use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

use rdev::{EventType, Key};
use tracing::{error, info};

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Block on the global key listener, firing `callback_fn` on ⌘⇧V.
///
/// Each trigger runs on a fresh thread so the input hook itself never
/// blocks; triggers within the debounce window are dropped.
pub fn listen<F>(callback_fn: F)
where
    F: Fn() + Send + Sync + 'static,
{
    info!("Starting global hotkey listener (rdev)");

    let meta_down = Arc::new(AtomicBool::new(false));
    let shift_down = Arc::new(AtomicBool::new(false));
    let last_trigger = Arc::new(parking_lot::Mutex::new(Instant::now() - DEBOUNCE * 2));

    let callback = Arc::new(callback_fn);

    let m = meta_down.clone();
    let s = shift_down.clone();
    let t = last_trigger.clone();

    if let Err(error) = rdev::listen(move |event| {
        match event.event_type {
            EventType::KeyPress(key) => match key {
                Key::MetaLeft | Key::MetaRight => m.store(true, Ordering::SeqCst),
                Key::ShiftLeft | Key::ShiftRight => s.store(true, Ordering::SeqCst),
                Key::KeyV => {
                    if m.load(Ordering::SeqCst) && s.load(Ordering::SeqCst) {
                        let mut last = t.lock();
                        if last.elapsed() >= DEBOUNCE {
                            info!("Hotkey detected: Meta+Shift+V");
                            *last = Instant::now();

                            // Never run the handler on the input hook thread.
                            let cb_clone = callback.clone();
                            thread::spawn(move || {
                                (cb_clone)();
                            });
                        }
                    }
                }
                _ => {}
            },
            EventType::KeyRelease(key) => match key {
                Key::MetaLeft | Key::MetaRight => m.store(false, Ordering::SeqCst),
                Key::ShiftLeft | Key::ShiftRight => s.store(false, Ordering::SeqCst),
                _ => {}
            },
            _ => {}
        }
    }) {
        error!("Global listener error: {:?}", error);
    }
}
