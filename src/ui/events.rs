use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal input on a dedicated thread and forwards it to the
/// async runtime.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                // Short poll so the stop flag is observed promptly.
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal event poll failed");
                        break;
                    }
                }

                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal event read failed");
                        break;
                    }
                };

                if forwarded.is_err() {
                    break;
                }
            }
        });

        Self { rx, stop }
    }

    /// Next terminal event; `None` once the reader thread has exited.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
