//! Question and answer data model for interactive parameter resolution.
//!
//! A command declares what it needs as [`QuestionSpec`]s; the resolver fills
//! a flat [`AnswerSet`] from supplied values, defaults, and (when allowed)
//! interactive input. Choice lists are an explicit tagged union: absent,
//! a static list, or a function of the answers collected so far.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Serialize;

/// A method picked from a contract's interface. The selector, when present,
/// pins down one overload; the name alone is the fallback identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRef {
    pub name: String,
    pub selector: Option<String>,
}

/// Final value of one resolved parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Method(MethodRef),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Method(_) => None,
        }
    }

    /// An empty string counts as "not supplied" for argument values.
    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(value) if value.is_empty())
    }
}

impl Display for AnswerValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => formatter.write_str(value),
            Self::Method(method) => formatter.write_str(&method.name),
        }
    }
}

/// Parameter name to final value; `None` means the parameter stayed
/// unresolved. Insertion order follows the declared parameter order.
pub type AnswerSet = IndexMap<String, Option<AnswerValue>>;

/// One selectable entry in a choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: AnswerValue,
}

/// A choice list entry: either a selectable choice or a section separator.
/// Separators label package sections and cannot be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceItem {
    Separator(String),
    Choice(Choice),
}

impl ChoiceItem {
    pub fn separator(label: impl Into<String>) -> Self {
        Self::Separator(label.into())
    }

    pub fn choice(label: impl Into<String>, value: AnswerValue) -> Self {
        Self::Choice(Choice {
            label: label.into(),
            value,
        })
    }
}

/// Where a question's choices come from.
pub enum ChoiceSource {
    /// Free-text question, no choices.
    None,
    /// A fixed list known up front.
    Static(Vec<ChoiceItem>),
    /// A list computed from the answers collected so far.
    Dynamic(Box<dyn Fn(&AnswerSet) -> Vec<ChoiceItem>>),
}

impl ChoiceSource {
    /// True when the list is known up front to offer nothing selectable.
    /// Such questions are skipped entirely; their value stays unresolved.
    #[must_use]
    pub fn is_statically_empty(&self) -> bool {
        match self {
            Self::Static(items) => !items
                .iter()
                .any(|item| matches!(item, ChoiceItem::Choice(_))),
            Self::None | Self::Dynamic(_) => false,
        }
    }

    /// The choice list for this question, or `None` for free text.
    #[must_use]
    pub fn evaluate(&self, prior: &AnswerSet) -> Option<Vec<ChoiceItem>> {
        match self {
            Self::None => None,
            Self::Static(items) => Some(items.clone()),
            Self::Dynamic(build) => Some(build(prior)),
        }
    }
}

/// Transform applied to a parameter's value after resolution.
pub type Normalizer = Box<dyn Fn(AnswerValue) -> AnswerValue>;

/// Describes one unit of interactively-obtainable input.
pub struct QuestionSpec {
    pub name: String,
    pub message: String,
    pub choices: ChoiceSource,
    pub default: Option<AnswerValue>,
    pub normalize: Option<Normalizer>,
}

impl QuestionSpec {
    /// A free-text question.
    pub fn text(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            choices: ChoiceSource::None,
            default: None,
            normalize: None,
        }
    }

    /// A question answered by picking from a fixed list.
    pub fn select(
        name: impl Into<String>,
        message: impl Into<String>,
        items: Vec<ChoiceItem>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            choices: ChoiceSource::Static(items),
            default: None,
            normalize: None,
        }
    }

    #[must_use]
    pub fn with_choices(mut self, choices: ChoiceSource) -> Self {
        self.choices = choices;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: AnswerValue) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_normalize(mut self, normalize: Normalizer) -> Self {
        self.normalize = Some(normalize);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_value_text_helpers() {
        let value = AnswerValue::text("0xAA");
        assert_eq!(value.as_text(), Some("0xAA"));
        assert!(!value.is_empty_text());
        assert!(AnswerValue::text("").is_empty_text());
    }

    #[test]
    fn test_answer_value_method_display() {
        let value = AnswerValue::Method(MethodRef {
            name: "initialize".to_string(),
            selector: Some("0xfe4b84df".to_string()),
        });
        assert_eq!(format!("{value}"), "initialize");
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn test_statically_empty_choice_sources() {
        assert!(ChoiceSource::Static(vec![]).is_statically_empty());
        // Separators alone offer nothing to pick
        assert!(
            ChoiceSource::Static(vec![ChoiceItem::separator("Local contracts")])
                .is_statically_empty()
        );
        assert!(!ChoiceSource::Static(vec![ChoiceItem::choice(
            "Token",
            AnswerValue::text("Token")
        )])
        .is_statically_empty());
        assert!(!ChoiceSource::None.is_statically_empty());
        // A function may produce choices later, so it never counts as empty
        assert!(!ChoiceSource::Dynamic(Box::new(|_| vec![])).is_statically_empty());
    }

    #[test]
    fn test_dynamic_choices_see_prior_answers() {
        let source = ChoiceSource::Dynamic(Box::new(|prior: &AnswerSet| {
            match prior.get("mode").and_then(Option::as_ref) {
                Some(mode) if mode.as_text() == Some("verbose") => vec![ChoiceItem::choice(
                    "Token at 0xAA",
                    AnswerValue::text("0xAA"),
                )],
                _ => vec![],
            }
        }));

        let mut prior = AnswerSet::new();
        assert_eq!(source.evaluate(&prior), Some(vec![]));

        prior.insert("mode".to_string(), Some(AnswerValue::text("verbose")));
        assert_eq!(source.evaluate(&prior).unwrap().len(), 1);
    }

    #[test]
    fn test_question_spec_builders() {
        let spec = QuestionSpec::text("amount", "Value for `amount`")
            .with_default(AnswerValue::text("0"))
            .with_normalize(Box::new(|value| match value {
                AnswerValue::Text(text) => AnswerValue::Text(text.trim().to_string()),
                other => other,
            }));

        assert_eq!(spec.name, "amount");
        assert_eq!(spec.default, Some(AnswerValue::text("0")));
        let normalize = spec.normalize.unwrap();
        assert_eq!(normalize(AnswerValue::text("  7 ")), AnswerValue::text("7"));
    }
}
