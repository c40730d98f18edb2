/// Blocking `window.alert`, used for repair status changes.
pub fn alert(text: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(text));
    match shown {
        Some(Ok(())) => {}
        Some(Err(e)) => log_warn!("[notify] alert failed: {:?}", e),
        None => log_warn!("[notify] no window, dropping alert: {}", text),
    }
}
