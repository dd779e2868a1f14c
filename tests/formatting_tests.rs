use send_lead::core::models::{FormType, Submission};
use send_lead::notification::format_notification;

/// Tests for the Telegram notification formatting
/// These verify the two message layouts the sales chat relies on.

fn submission(form_type: FormType, message: &str) -> Submission {
    Submission {
        name: "Ivan".to_string(),
        phone: "+79990000000".to_string(),
        message: message.to_string(),
        form_type,
    }
}

#[test]
fn test_callback_format() {
    let text = format_notification(&submission(FormType::Callback, "call me back"), "ElectroRide");

    assert_eq!(
        text,
        "📞 <b>Запрос обратного звонка</b>\n\n👤 Имя: Ivan\n📱 Телефон: +79990000000\n💬 Сообщение: call me back"
    );
}

#[test]
fn test_lead_format() {
    let text = format_notification(&submission(FormType::Lead, "Model X"), "ElectroRide");

    assert_eq!(
        text,
        "⚡ <b>Новая заявка с сайта ElectroRide</b>\n\n👤 Имя: Ivan\n📱 Телефон: +79990000000\n💬 Интерес: Model X"
    );
}

#[test]
fn test_message_line_omitted_when_empty() {
    let lead = format_notification(&submission(FormType::Lead, ""), "ElectroRide");
    let callback = format_notification(&submission(FormType::Callback, ""), "ElectroRide");

    assert!(
        lead.ends_with("📱 Телефон: +79990000000"),
        "Lead without message should end with the phone line"
    );
    assert!(
        callback.ends_with("📱 Телефон: +79990000000"),
        "Callback without message should end with the phone line"
    );
    assert!(!lead.contains("💬"));
    assert!(!callback.contains("💬"));
}

#[test]
fn test_site_name_is_configurable() {
    let text = format_notification(&submission(FormType::Lead, ""), "Acme <Bikes>");

    assert!(
        text.starts_with("⚡ <b>Новая заявка с сайта Acme &lt;Bikes&gt;</b>"),
        "Site name should be placed in the header, escaped"
    );
}

#[test]
fn test_user_input_is_html_escaped() {
    let s = Submission {
        name: "<script>".to_string(),
        phone: "+7 & co".to_string(),
        message: "<b>bold</b>".to_string(),
        form_type: FormType::Callback,
    };

    let text = format_notification(&s, "ElectroRide");

    assert!(text.contains("👤 Имя: &lt;script&gt;"));
    assert!(text.contains("📱 Телефон: +7 &amp; co"));
    assert!(text.contains("💬 Сообщение: &lt;b&gt;bold&lt;/b&gt;"));
    // Only the header carries markup.
    assert_eq!(text.matches("<b>").count(), 1);
}
