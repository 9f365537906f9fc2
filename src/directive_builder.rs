//! Directive fragment construction.
//!
//! Each builder returns either a complete directive string or an empty
//! string when its toggle is off; the assembler skips empty fragments.

use crate::models::{FrameRate, SubtitleFormat};

/// Source filter used to open the media file.
pub const SOURCE_FILTER: &str = "DirectShowSource";

/// Color-space conversion appended to the source line ahead of frame
/// interpolation, which wants YV12 input.
pub const YV12_CONVERSION: &str = ".ConvertToYV12()";

/// Goes at the start of the script to initiate multithreading.
pub const MT_PROLOGUE: &str = "SetMemoryMax(1024)\nSetMTMode(3,12)";

/// Goes after the source line to make multithreading more efficient.
pub const MT_POST_SOURCE: &str = "SetMTMode(2)";

/// Core count passed to the interpolation filter. Fixed; the host's
/// core count feeds UI estimates only.
pub const INTERFRAME_CORES: i32 = 4;

/// Tuning profile passed to the interpolation filter.
pub const INTERFRAME_TUNING: &str = "Animation";

/// Parameter clause letting the interpolation filter use the GPU.
pub const INTERFRAME_GPU_CLAUSE: &str = ", GPU=true";

/// Renderer for text subtitle formats.
pub const TEXT_SUBTITLE_FILTER: &str = "TextSub";

/// Renderer for image-based subtitle formats.
pub const IMAGE_SUBTITLE_FILTER: &str = "VobSub";

/// Build the source-loading line: the source filter opening the media
/// path, the declared-fps clause, and the assume-rate suffix. With
/// interpolation on, the color-space conversion is appended.
pub fn source_line(media_path: &str, frame_rate: &FrameRate, interframe: bool) -> String {
    let mut line = format!(
        "{}(\"{}\"{}){}",
        SOURCE_FILTER,
        media_path,
        declared_fps_clause(&frame_rate.display),
        assume_fps_suffix(frame_rate),
    );
    if interframe {
        line.push_str(YV12_CONVERSION);
    }
    line
}

/// Assume-rate suffix pinning the clip to the reconciled frame rate.
pub fn assume_fps_suffix(frame_rate: &FrameRate) -> String {
    format!(
        ".AssumeFPS({},{})",
        frame_rate.numerator, frame_rate.denominator
    )
}

/// Declared-fps clause for the source filter. A display rate of "0"
/// means the rate is unknown and the clause is omitted.
pub fn declared_fps_clause(display: &str) -> String {
    if display == "0" {
        String::new()
    } else {
        format!(", fps={}", display)
    }
}

/// Multithreading prologue for the top of the script, or empty.
pub fn mt_prologue(multithreading: bool) -> &'static str {
    if multithreading {
        MT_PROLOGUE
    } else {
        ""
    }
}

/// Threading-mode switch for just after the source line, or empty.
pub fn mt_post_source(multithreading: bool) -> &'static str {
    if multithreading {
        MT_POST_SOURCE
    } else {
        ""
    }
}

/// Frame-interpolation directive, or empty when the toggle is off.
pub fn interframe_line(interframe: bool, gpu: bool) -> String {
    if !interframe {
        return String::new();
    }
    let gpu_clause = if gpu { INTERFRAME_GPU_CLAUSE } else { "" };
    format!(
        "InterFrame(Cores={}{},Tuning=\"{}\")",
        INTERFRAME_CORES, gpu_clause, INTERFRAME_TUNING
    )
}

/// Subtitle overlay directive for an external subtitle file. Format
/// selects the renderer; image-based formats need the bitmap overlay.
pub fn subtitle_line(subtitle_path: &str, format: SubtitleFormat) -> String {
    let function = if format.is_image_based() {
        IMAGE_SUBTITLE_FILTER
    } else {
        TEXT_SUBTITLE_FILTER
    };
    format!("{}(\"{}\")", function, subtitle_path)
}
