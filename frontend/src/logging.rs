use std::io;

use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use wasm_bindgen::JsValue;

/// Buffers one formatted event and hands it to the browser console when dropped.
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
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
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&JsValue::from_str(line));
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buffer: Vec::new() }
    }
}

/// Routes `tracing` events from the app and the tracker library to devtools.
/// There is no wall clock in the formatter, `SystemTime` is unavailable in wasm.
pub fn init_logging() {
    let filter = EnvFilter::new(format!("{}=debug,workout_tracker_lib=debug", env!("CARGO_CRATE_NAME")));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time().with_ansi(false).with_writer(MakeConsoleWriter))
        .try_init();
}
