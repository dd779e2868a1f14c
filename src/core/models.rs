use serde_json::Value;

use crate::errors::RequestError;

/// Which website form the submission came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormType {
    #[default]
    Lead,
    Callback,
}

impl FormType {
    /// Only an exact `"callback"` selects the callback form; anything else is a lead.
    #[must_use]
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw.and_then(Value::as_str) {
            Some("callback") => FormType::Callback,
            _ => FormType::Lead,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormType::Lead => "lead",
            FormType::Callback => "callback",
        }
    }
}

/// A single form submission, normalized and request-scoped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub form_type: FormType,
}

impl Submission {
    /// Extracts the form fields from a parsed JSON body.
    ///
    /// Missing or non-string fields become empty strings; all text is trimmed.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let text = |key: &str| {
            body.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            name: text("name"),
            phone: text("phone"),
            message: text("message"),
            form_type: FormType::from_raw(body.get("form_type")),
        }
    }

    /// # Errors
    ///
    /// Returns [`RequestError::MissingRequiredFields`] when `name` or `phone` is empty.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.name.is_empty() || self.phone.is_empty() {
            return Err(RequestError::MissingRequiredFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_are_trimmed() {
        let s = Submission::from_body(&json!({
            "name": "  Ivan ",
            "phone": "\t+79990000000\n",
            "message": " hi  "
        }));
        assert_eq!(s.name, "Ivan");
        assert_eq!(s.phone, "+79990000000");
        assert_eq!(s.message, "hi");
        assert_eq!(s.form_type, FormType::Lead);
    }

    #[test]
    fn test_form_type_defaults_to_lead() {
        assert_eq!(FormType::from_raw(None), FormType::Lead);
        assert_eq!(FormType::from_raw(Some(&json!(null))), FormType::Lead);
        assert_eq!(FormType::from_raw(Some(&json!("Callback"))), FormType::Lead);
        assert_eq!(FormType::from_raw(Some(&json!(42))), FormType::Lead);
        assert_eq!(
            FormType::from_raw(Some(&json!("callback"))),
            FormType::Callback
        );
    }

    #[test]
    fn test_non_string_fields_are_empty() {
        let s = Submission::from_body(&json!({ "name": 7, "phone": ["+7"] }));
        assert!(s.name.is_empty());
        assert!(s.phone.is_empty());
        assert_eq!(s.validate(), Err(RequestError::MissingRequiredFields));
    }

    #[test]
    fn test_validate() {
        let ok = Submission::from_body(&json!({ "name": "Ivan", "phone": "+7" }));
        assert!(ok.validate().is_ok());

        let blank_phone = Submission::from_body(&json!({ "name": "Ivan", "phone": "   " }));
        assert_eq!(
            blank_phone.validate(),
            Err(RequestError::MissingRequiredFields)
        );
    }
}
