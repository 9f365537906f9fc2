//! Data models shared between the media server and the script worker.
//! These must serialize to/from JSON compatibly with the server equivalents.

mod script_job;
mod avs_settings;
mod frame_rate;
mod subtitle_track;
mod worker_message;

pub use script_job::*;
pub use avs_settings::*;
pub use frame_rate::*;
pub use subtitle_track::*;
pub use worker_message::*;
