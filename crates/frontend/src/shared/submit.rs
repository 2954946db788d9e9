use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Stand-in for a save round trip: resolves after `delay_ms`.
///
/// There is no backend, so this never fails.
pub async fn simulate_request(delay_ms: u32) {
    TimeoutFuture::new(delay_ms).await;
}

/// Show `message` in `slot` for `duration_ms`.
///
/// The slot is only cleared if it still holds this message, so a newer
/// message is not cut short by an older timer.
pub fn flash_message(slot: RwSignal<Option<String>>, message: String, duration_ms: u32) {
    slot.set(Some(message.clone()));
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        let still_shown = slot
            .try_get_untracked()
            .flatten()
            .is_some_and(|current| current == message);
        if still_shown {
            slot.try_set(None);
        }
    });
}
