//! Format layer construction

use std::fmt;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};

/// Timestamp formatter that can be switched off at runtime.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Timer {
    enabled: bool,
}

impl Timer {
    pub(crate) const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl FormatTime for Timer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        if self.enabled {
            SystemTime.format_time(w)
        } else {
            Ok(())
        }
    }
}

/// Build a text `fmt` layer (`pretty` or `compact`) from display options.
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer($writer)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_thread_names($display.thread_names)
            .with_timer($crate::format::Timer::new($display.time))
    }};
}

/// Build a JSON `fmt` layer from display options.
macro_rules! create_json_layer {
    ($display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer($writer)
            .with_current_span(true)
            .with_span_list($display.span_list)
            .flatten_event($display.flatten)
            .with_ansi(false)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_thread_names($display.thread_names)
            .with_timer($crate::format::Timer::new($display.time))
    }};
}

pub(crate) use {create_fmt_layer, create_json_layer};
