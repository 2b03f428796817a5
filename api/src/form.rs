use reqwest::multipart::Form;

/// Ordered form fields, sent as a multipart body.
///
/// Field order is preserved so the request mirrors what the user filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, replacing an earlier value with the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn to_multipart(&self) -> Form {
        self.fields
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_replace_earlier_ones_in_place() {
        let payload = FormPayload::new()
            .with("patient_name", "Jane")
            .with("Age_Year", "45")
            .with("patient_name", "Jane Doe");

        let names: Vec<_> = payload.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["patient_name", "Age_Year"]);
        assert_eq!(payload.get("patient_name"), Some("Jane Doe"));
        assert_eq!(payload.len(), 2);
    }

    #[test]
    fn missing_field_is_none() {
        assert!(FormPayload::new().get("smoke").is_none());
        assert!(FormPayload::new().is_empty());
    }
}
