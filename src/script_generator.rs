//! AviSynth script generator.
//!
//! Builds the script line sequence for a job and writes it to an
//! artifact in the configured temp directory.

use std::path::Path;

use crate::directive_builder;
use crate::models::{AvsSettings, FrameRate, LogLevel, ScriptJob};
use crate::platform;
use crate::progress_reporter::ProgressReporter;
use crate::script_assembler::{self, ScriptFragments};
use crate::script_template::ScriptTemplate;
use crate::script_writer::{self, ScriptArtifact, ScriptError};

/// Generates AviSynth input scripts from jobs.
pub struct ScriptGenerator {
    settings: AvsSettings,
    reporter: ProgressReporter,
}

impl ScriptGenerator {
    /// Create a generator over one settings snapshot.
    pub fn new(settings: AvsSettings, reporter: ProgressReporter) -> Self {
        Self { settings, reporter }
    }

    /// Build the script lines for a job.
    ///
    /// Touches the filesystem only for the media existence probe; the
    /// artifact is not written.
    pub fn render(&self, job: &ScriptJob) -> Vec<String> {
        let settings = &self.settings;
        let frame_rate =
            FrameRate::reconcile(job.frame_rate_ratio.as_deref(), job.frame_rate.as_deref());
        let media_path = resolve_media_path(&job.input_path);

        let fragments = ScriptFragments {
            source_line: directive_builder::source_line(
                &media_path,
                &frame_rate,
                settings.interframe,
            ),
            mt_prologue: directive_builder::mt_prologue(settings.multithreading).to_string(),
            mt_post_source: directive_builder::mt_post_source(settings.multithreading).to_string(),
            interframe_line: directive_builder::interframe_line(
                settings.interframe,
                settings.interframe_gpu,
            ),
            subtitle_line: self.subtitle_line(job),
            media_path,
        };

        let template =
            ScriptTemplate::parse(&settings.script_template, &settings.template_separator);
        script_assembler::assemble(&template, &fragments)
    }

    /// Generate the script artifact for a job.
    ///
    /// The artifact name is derived from the raw job path, before any
    /// platform shortening, so the host can predict it.
    pub fn generate(&self, job: &ScriptJob) -> Result<ScriptArtifact, ScriptError> {
        let lines = self.render(job);
        script_writer::write_script(&self.settings.temp_dir, &job.input_path, &lines)
    }

    /// Subtitle directive for the job, if every enablement condition
    /// holds: the kill switch is off, autoload is on, and the job
    /// carries a file-backed track.
    fn subtitle_line(&self, job: &ScriptJob) -> Option<String> {
        if self.settings.disable_subtitles || !self.settings.autoload_subtitles {
            return None;
        }
        let track = job.subtitle.as_ref()?;
        let external_file = track.external_file.as_deref()?;

        self.reporter.send_log(
            LogLevel::Info,
            &format!("Using subtitle track for {}: {}", job.input_path, track),
        );

        // Subtitle paths are shortened even when the file is missing;
        // only the media path gets an existence gate.
        let subtitle_path = platform::script_safe_path(external_file);
        Some(directive_builder::subtitle_line(&subtitle_path, track.format))
    }
}

/// Media path as the script sees it: shortened when the file exists,
/// verbatim otherwise.
fn resolve_media_path(input_path: &str) -> String {
    if Path::new(input_path).exists() {
        platform::script_safe_path(input_path)
    } else {
        input_path.to_string()
    }
}
