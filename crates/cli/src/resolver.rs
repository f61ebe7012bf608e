//! The parameter resolver.
//!
//! Merges caller-supplied argument/option values, computed defaults, and one
//! batched interactive round per namespace into a single answer set. Nothing
//! here performs I/O beyond the prompter; each call reads fresh inputs and
//! returns a new answer set.

use indexmap::IndexMap;

use proxup_core::error::{Error, Result};

use crate::prompt::{PendingQuestion, Prompter};
use crate::questions::{AnswerSet, AnswerValue, QuestionSpec};

/// Resolves declared arguments and options into one flat answer set.
///
/// Per name, a supplied value wins: the name is treated as already answered
/// when its value is defined (and, for `args`, non-empty). Names whose
/// question has a static choice list with nothing selectable are skipped and
/// stay unresolved. The rest become questions, defaulted from `defaults`
/// first and the spec's own default second, and are collected in one batched
/// prompt round per namespace when `interactive` is true; otherwise they
/// stay unresolved.
///
/// `args` and `opts` are resolved independently (two batches, args first)
/// and shallow-merged. A name present in both namespaces is unsupported:
/// the opts result wins.
///
/// # Errors
///
/// Fails only when an interactive round fails; no partial answer set is
/// returned in that case.
pub fn resolve(
    args: &AnswerSet,
    opts: &AnswerSet,
    props: &IndexMap<String, QuestionSpec>,
    defaults: &IndexMap<String, AnswerValue>,
    interactive: bool,
    prompter: &mut dyn Prompter,
) -> Result<AnswerSet> {
    let empty_prior = AnswerSet::new();
    let mut merged = resolve_namespace(
        args,
        true,
        props,
        defaults,
        interactive,
        prompter,
        &empty_prior,
    )?;

    // The opts batch sees the resolved args as prior answers, so dynamic
    // choice lists can depend on them.
    let resolved_opts = resolve_namespace(
        opts,
        false,
        props,
        defaults,
        interactive,
        prompter,
        &merged,
    )?;

    merged.extend(resolved_opts);
    Ok(merged)
}

fn resolve_namespace(
    supplied: &AnswerSet,
    require_non_empty: bool,
    props: &IndexMap<String, QuestionSpec>,
    defaults: &IndexMap<String, AnswerValue>,
    interactive: bool,
    prompter: &mut dyn Prompter,
    prior: &AnswerSet,
) -> Result<AnswerSet> {
    let mut result = AnswerSet::new();
    let mut pending: Vec<PendingQuestion<'_>> = Vec::new();

    for (name, value) in supplied {
        let already_answered = match value {
            Some(value) => !(require_non_empty && value.is_empty_text()),
            None => false,
        };

        if already_answered {
            result.insert(name.clone(), value.clone());
            continue;
        }

        // Placeholder keeps the declared order even for unanswered names
        result.insert(name.clone(), None);

        let Some(spec) = props.get(name) else {
            // No question declared for this name, nothing to collect
            continue;
        };

        if spec.choices.is_statically_empty() {
            continue;
        }

        let default = defaults.get(name).cloned().or_else(|| spec.default.clone());
        pending.push(PendingQuestion { spec, default });
    }

    if interactive && !pending.is_empty() {
        let answers = prompter.ask(&pending, prior)?;
        if answers.len() != pending.len() {
            return Err(Error::PromptAborted);
        }

        for (question, answer) in pending.iter().zip(answers) {
            result.insert(question.spec.name.clone(), answer);
        }
    }

    for (name, value) in &mut result {
        if let Some(taken) = value.take() {
            let normalized = match props.get(name).and_then(|spec| spec.normalize.as_ref()) {
                Some(normalize) => normalize(taken),
                None => taken,
            };
            *value = Some(normalized);
        }
    }

    Ok(result)
}
