//! `ftv play` - interactive terminal playback.

use std::path::Path;

use anyhow::Result;

use ftv::player::play_flight;

#[cfg(not(tarpaulin_include))]
pub fn handle_play(file: &Path, speed: Option<f64>) -> Result<()> {
    play_flight(file, speed)
}
