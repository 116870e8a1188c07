//! Destructive alert box.

use super::icons;
use crate::ui::escape;

/// Alert with a title and an escaped message.
#[must_use]
pub fn alert_destructive(title: &str, message: &str) -> String {
    format!(
        r#"<div class="alert alert-destructive" role="alert">{icon}<div><h5 class="alert-title">{title}</h5><p class="alert-description">{message}</p></div></div>"#,
        icon = icons::ALERT,
        title = escape(title),
        message = escape(message),
    )
}
