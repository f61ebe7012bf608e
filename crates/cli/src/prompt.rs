//! Interactive input collection.
//!
//! The resolver hands a batch of pending questions to a [`Prompter`] and
//! suspends until the whole batch is answered. [`StdinPrompter`] is the
//! line-based terminal implementation; tests substitute their own.

use std::io::{stdin, stdout, Write};

use proxup_core::error::{Error, Result};

use crate::questions::{AnswerSet, AnswerValue, Choice, ChoiceItem, QuestionSpec};

/// A question the resolver decided still needs an answer, together with the
/// effective default (caller-supplied defaults win over the spec's own).
pub struct PendingQuestion<'a> {
    pub spec: &'a QuestionSpec,
    pub default: Option<AnswerValue>,
}

/// Collects answers for one batch of questions.
///
/// The whole batch is one suspension point: either every question gets an
/// answer slot (which may be `None` when its choice list turned out empty),
/// or the round fails as a whole and no partial answers are returned.
pub trait Prompter {
    /// Answers for `questions`, one slot per question, in order. Dynamic
    /// choice lists are evaluated against `prior` plus the answers already
    /// given earlier in this round.
    ///
    /// # Errors
    ///
    /// Fails when the input source is unavailable or closes mid-round.
    fn ask(
        &mut self,
        questions: &[PendingQuestion<'_>],
        prior: &AnswerSet,
    ) -> Result<Vec<Option<AnswerValue>>>;
}

/// Line-based prompting on stdin/stdout.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(
        &mut self,
        questions: &[PendingQuestion<'_>],
        prior: &AnswerSet,
    ) -> Result<Vec<Option<AnswerValue>>> {
        let mut collected = prior.clone();
        let mut answers = Vec::with_capacity(questions.len());

        for question in questions {
            let answer = match question.spec.choices.evaluate(&collected) {
                None => Some(prompt_value(
                    &question.spec.message,
                    question.default.as_ref(),
                )?),
                Some(items) => {
                    prompt_choice(&question.spec.message, &items, question.default.as_ref())?
                }
            };

            collected.insert(question.spec.name.clone(), answer.clone());
            answers.push(answer);
        }

        Ok(answers)
    }
}

/// Prompts for a free-text value, looping until the user enters something or
/// accepts an available default.
fn prompt_value(message: &str, default: Option<&AnswerValue>) -> Result<AnswerValue> {
    loop {
        if let Some(default) = default {
            print!("{message} [{default}]: ");
        } else {
            print!("{message}: ");
        }
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            return Err(Error::PromptAborted);
        }

        let read_value = input.trim().to_string();
        if !read_value.is_empty() {
            return Ok(AnswerValue::Text(read_value));
        }

        if let Some(default) = default {
            return Ok(default.clone());
        }

        // No input and no default, ask again
    }
}

/// Prompts for a selection from a numbered list. Separators are printed as
/// section headings and take no number. An empty list yields `None` without
/// prompting (nothing to offer).
fn prompt_choice(
    message: &str,
    items: &[ChoiceItem],
    default: Option<&AnswerValue>,
) -> Result<Option<AnswerValue>> {
    let selectable: Vec<&Choice> = items
        .iter()
        .filter_map(|item| match item {
            ChoiceItem::Choice(choice) => Some(choice),
            ChoiceItem::Separator(_) => None,
        })
        .collect();

    if selectable.is_empty() {
        return Ok(None);
    }

    println!("{message}:");
    let mut number = 0;
    for item in items {
        match item {
            ChoiceItem::Separator(label) => println!("--- {label} ---"),
            ChoiceItem::Choice(choice) => {
                number += 1;
                println!("{number}) {}", choice.label);
            }
        }
    }

    loop {
        if let Some(default) = default {
            print!("Select [1-{}] [{default}]: ", selectable.len());
        } else {
            print!("Select [1-{}]: ", selectable.len());
        }
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            return Err(Error::PromptAborted);
        }

        let read_value = input.trim();
        if read_value.is_empty() {
            if let Some(default) = default {
                return Ok(Some(default.clone()));
            }
            continue;
        }

        if let Ok(picked) = read_value.parse::<usize>() {
            if picked >= 1 && picked <= selectable.len() {
                return Ok(Some(selectable[picked - 1].value.clone()));
            }
        }
    }
}
