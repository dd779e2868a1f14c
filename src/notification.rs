//! Telegram message formatting for form submissions.
//!
//! Messages use Telegram's HTML parse mode, so every user-supplied value is
//! escaped before it is placed in the text.

use crate::core::models::{FormType, Submission};

/// Escape the characters Telegram's HTML parser treats as markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build the notification text for a validated submission.
///
/// # Examples
///
/// ```
/// use send_lead::core::models::{FormType, Submission};
/// use send_lead::notification::format_notification;
///
/// let submission = Submission {
///     name: "Ivan".to_string(),
///     phone: "+79990000000".to_string(),
///     message: String::new(),
///     form_type: FormType::Lead,
/// };
/// let text = format_notification(&submission, "ElectroRide");
/// assert!(text.starts_with("⚡ <b>Новая заявка с сайта ElectroRide</b>"));
/// ```
#[must_use]
pub fn format_notification(submission: &Submission, site_name: &str) -> String {
    let (header, message_label) = match submission.form_type {
        FormType::Callback => ("📞 <b>Запрос обратного звонка</b>".to_string(), "Сообщение"),
        FormType::Lead => (
            format!("⚡ <b>Новая заявка с сайта {}</b>", escape_html(site_name)),
            "Интерес",
        ),
    };

    let mut text = format!(
        "{}\n\n👤 Имя: {}\n📱 Телефон: {}",
        header,
        escape_html(&submission.name),
        escape_html(&submission.phone)
    );

    if !submission.message.is_empty() {
        text.push_str(&format!(
            "\n💬 {}: {}",
            message_label,
            escape_html(&submission.message)
        ));
    }

    text
}
