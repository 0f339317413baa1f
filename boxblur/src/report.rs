//! Console previews of sample buffers
//!
//! Blur outputs are millions of samples long; a run only shows the first
//! few, laid out in fixed-width columns.

use std::fmt::Write;
use std::time::Duration;

/// Samples printed per line
pub const PREVIEW_COLUMNS: usize = 20;

/// Default number of samples in a preview
pub const DEFAULT_PREVIEW_LEN: usize = 100;

/// Format the first `limit` samples of `samples` under `label`.
///
/// Samples are right-aligned to width 3, [`PREVIEW_COLUMNS`] per line. If
/// the buffer is longer than `limit`, a trailing line reports how many
/// samples were left out.
///
/// # Examples
///
/// ```
/// use boxblur::report::format_preview;
///
/// let text = format_preview(&[1, 22, 255, 4], "Output", 3);
/// assert_eq!(text, "Output: [\n    1,  22, 255\n  ... 1 more items\n]\n");
/// ```
pub fn format_preview(samples: &[u8], label: &str, limit: usize) -> String {
    let shown = &samples[..limit.min(samples.len())];
    let mut out = format!("{}: [", label);

    for (i, value) in shown.iter().enumerate() {
        if i % PREVIEW_COLUMNS == 0 {
            out.push_str("\n  ");
        } else {
            out.push(' ');
        }
        let _ = write!(out, "{:>3}", value);
        if i + 1 < shown.len() {
            out.push(',');
        }
    }

    let hidden = samples.len() - shown.len();
    if hidden > 0 {
        let _ = write!(out, "\n  ... {} more items", hidden);
    }
    out.push_str("\n]\n");
    out
}

/// Format an elapsed duration as seconds with millisecond precision.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use boxblur::report::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_millis(1234)), "1.234 s");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3} s", elapsed.as_secs_f64())
}
