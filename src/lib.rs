//! avsprep Library
//!
//! Generates AviSynth input scripts for DirectShow playback pipelines.

pub mod models;
pub mod directive_builder;
pub mod script_template;
pub mod script_assembler;
pub mod script_writer;
pub mod script_generator;
pub mod progress_reporter;
pub mod platform;
