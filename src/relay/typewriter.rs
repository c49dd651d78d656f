//! Typewriter pacing for the response body
//!
//! The upstream answer is fully known before the body starts; this module
//! emits it one character per tick so the caller sees a live-looking stream.
//! The pacing loop lives inside the body stream itself, so dropping the
//! response (caller disconnect) cancels the loop with no further writes.

use std::convert::Infallible;
use std::time::Duration;

use bytes::Bytes;
use futures::Stream;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::error::{RelayError, ERROR_MARKER};

/// Emit `text` one character per `tick` as a chunked body stream.
///
/// Characters are emitted in order with no loss; each chunk is one UTF-8
/// encoded character. The stream ends after the last character.
pub fn typewriter(text: String, tick: Duration) -> impl Stream<Item = Result<Bytes, Infallible>> {
    async_stream::stream! {
        // First character waits a full tick, like every later one
        let mut ticker = interval_at(Instant::now() + tick, tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            ticker.tick().await;
            yield Ok(Bytes::copy_from_slice(ch.encode_utf8(&mut buf).as_bytes()));
        }
    }
}

/// Render a relay failure as a single inline error chunk.
pub fn error_chunk(err: &RelayError) -> Bytes {
    Bytes::from(format!("{ERROR_MARKER}{err}"))
}
