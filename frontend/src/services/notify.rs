//! Blocking user notifications.

/// Show `message` in a browser alert dialog.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::error!("Failed to show alert: {:?}", e);
    }
}
