//! Blocking user notifications.

/// Show `message` in a browser alert box. Outside the browser the message is
/// only logged.
pub fn alert(message: &str) {
    #[cfg(feature = "web")]
    {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if matches!(shown, Some(Ok(()))) {
            return;
        }
    }
    tracing::warn!(%message, "alert");
}
