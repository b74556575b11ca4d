use std::{
    cell::RefCell,
    io::{self, Write},
};

use tracing::{level_filters::LevelFilter, Level, Metadata};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    prelude::*,
    reload, Registry,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Buffers a single formatted event, and sends it to the console method matching its level once
/// dropped.
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let message = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(message.trim_end());

        match self.level {
            Level::ERROR => console::error_1(&message),
            Level::WARN => console::warn_1(&message),
            Level::INFO => console::info_1(&message),
            _ => console::log_1(&message),
        }
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

thread_local! {
    /// Handle to the installed subscriber's level filter, present once [`init()`] has run.
    static LEVEL: RefCell<Option<reload::Handle<LevelFilter, Registry>>> = RefCell::new(None);
}

/// Send log output at or above `max_level` to the browser console. The first call installs the
/// global subscriber, later calls only change its level.
pub fn init(max_level: Level) {
    let filter = LevelFilter::from_level(max_level);

    LEVEL.with(|level| {
        let mut level = level.borrow_mut();

        if let Some(handle) = level.as_ref() {
            if let Err(error) = handle.modify(|current| *current = filter) {
                console::warn_1(&JsValue::from_str(&format!(
                    "failed to change log level: {error}"
                )));
            }

            return;
        }

        let (filter, handle) = reload::Layer::new(filter);

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(MakeConsoleWriter)
                    // No clock available without a host binding
                    .without_time(),
            )
            .try_init()
            .is_ok();

        if installed {
            *level = Some(handle);
        }
    });
}

/// Level currently applied to console output, if [`init()`] has installed the subscriber.
pub fn current_level() -> Option<LevelFilter> {
    LEVEL.with(|level| {
        level
            .borrow()
            .as_ref()
            .and_then(|handle| handle.clone_current())
    })
}
