//! Audio cache warming after a refill.

use futures::future::join_all;
use tracing::debug;

use crate::api::ClipApi;

/// Requests every audio source concurrently and waits for all of them.
///
/// Returns the number of requests that failed. Failures are logged and
/// otherwise ignored.
pub(super) async fn prewarm_audio<A: ClipApi>(api: &A, audio_srcs: &[String]) -> usize {
    let results = join_all(audio_srcs.iter().map(|src| api.prewarm_audio(src))).await;

    let mut failures = 0;
    for (src, result) in audio_srcs.iter().zip(results) {
        if let Err(e) = result {
            failures += 1;
            debug!(audio_src = %src, error = %e, "Audio prewarm failed");
        }
    }
    failures
}
