use serde::Serialize;

/// Query string for `/search`. Unset fields are left out of the URL.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SearchParams {
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    pub fn goal(goal: impl Into<String>) -> Self {
        Self {
            goal: Some(goal.into()),
            ..Self::default()
        }
    }

    /// A category picked from the icon grid on the landing page.
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            category: Some(name.into()),
            source: Some("category-icon".to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_set_fields_are_serialized() {
        assert_eq!(
            serde_json::to_value(SearchParams::query("rust & wasm")).unwrap(),
            json!({ "q": "rust & wasm" })
        );
        assert_eq!(
            serde_json::to_value(SearchParams::goal("Study Abroad")).unwrap(),
            json!({ "goal": "Study Abroad" })
        );
    }

    #[test]
    fn category_records_its_source() {
        assert_eq!(
            serde_json::to_value(SearchParams::category("AI & ML")).unwrap(),
            json!({ "category": "AI & ML", "source": "category-icon" })
        );
    }
}
