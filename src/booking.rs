use chrono::NaiveDate;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Bridal,
    SpecialEvent,
    Editorial,
    Lessons,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Bridal,
        ServiceCategory::SpecialEvent,
        ServiceCategory::Editorial,
        ServiceCategory::Lessons,
    ];

    /// Value of the `<option>` element.
    pub fn value(self) -> &'static str {
        match self {
            ServiceCategory::Bridal => "bridal",
            ServiceCategory::SpecialEvent => "special-event",
            ServiceCategory::Editorial => "editorial",
            ServiceCategory::Lessons => "lessons",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::Bridal => "Bridal Makeup",
            ServiceCategory::SpecialEvent => "Special Event",
            ServiceCategory::Editorial => "Editorial/Photoshoot",
            ServiceCategory::Lessons => "Makeup Lessons",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// What the consultation form has captured so far. Nothing is sent anywhere.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub service: Option<ServiceCategory>,
    pub preferred_date: Option<NaiveDate>,
    pub notes: String,
}

impl BookingDraft {
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if !self.email.contains('@') {
            missing.push("email");
        }
        if self.service.is_none() {
            missing.push("service");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_values_round_trip_through_form() {
        for category in ServiceCategory::ALL {
            assert_eq!(ServiceCategory::from_value(category.value()), Some(category));
        }
        assert_eq!(ServiceCategory::from_value(""), None);
        assert_eq!(ServiceCategory::from_value("nails"), None);
    }

    #[test]
    fn test_serde_uses_form_values() {
        let json = serde_json::to_string(&ServiceCategory::SpecialEvent).unwrap();
        assert_eq!(json, "\"special-event\"");
    }

    #[test]
    fn test_draft_json() {
        let draft = BookingDraft {
            name: "Priya".into(),
            email: "priya@example.com".into(),
            service: Some(ServiceCategory::Bridal),
            preferred_date: BookingDraft::parse_date("2026-12-05"),
            notes: String::new(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["service"], "bridal");
        assert_eq!(value["preferred_date"], "2026-12-05");
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let draft = BookingDraft {
            name: "  ".into(),
            email: "not-an-email".into(),
            ..Default::default()
        };
        assert_eq!(draft.missing_fields(), vec!["name", "email", "service"]);
        assert_eq!(BookingDraft::parse_date("05/12/2026"), None);
    }
}
