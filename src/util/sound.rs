//! Audio cues for message arrival, keyed by origin.

#[cfg(test)]
#[path = "sound_test.rs"]
mod sound_test;

use crate::state::chat::Origin;

/// Clip played when the local user sends a message.
pub const SEND_CLIP: &str = "/assets/send.mp3";
/// Clip played when a bot message arrives (including the seeded greeting).
pub const RECEIVE_CLIP: &str = "/assets/receive.mp3";

/// Path of the audio clip for the given message origin.
pub fn clip_for(origin: Origin) -> &'static str {
    match origin {
        Origin::Me => SEND_CLIP,
        Origin::Bot => RECEIVE_CLIP,
    }
}

/// Play the origin-matched clip, fire-and-forget.
///
/// Browser autoplay policy may reject playback; the failure is ignored.
/// No-op outside the browser build.
pub fn play_clip(origin: Origin) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(clip_for(origin)) {
            let _ = audio.play();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = origin;
    }
}
