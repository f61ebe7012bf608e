use std::process::ExitCode;

use clap::Parser;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;

use proxup_core::error::{Error, Result};
use proxup_core::naming::ContractFullName;
use proxup_core::network::NetworkFile;
use proxup_core::state::ProjectState;
use proxup_core::{config, file_handling};

use proxup_cli::catalog;
use proxup_cli::cli_args::{self, Args, CommandArgs};
use proxup_cli::prompt::{Prompter, StdinPrompter};
use proxup_cli::proxies::{self, ContractRef, ResolvedProxy, PICK_BY_ADDRESS, PICK_BY_NAME};
use proxup_cli::questions::{
    AnswerSet, AnswerValue, ChoiceItem, ChoiceSource, MethodRef, QuestionSpec,
};
use proxup_cli::resolver;

/// Question name the proxy list keys its display mode off.
const PICK_MODE_QUESTION: &str = "pickProxyBy";

/// The fully resolved outcome of a `call` invocation, handed to the actual
/// call action (and printed here, since this layer performs no network I/O).
#[derive(Serialize)]
struct CallPlan {
    network: String,
    proxy: ResolvedProxy,
    method: Option<AnswerValue>,
    args: AnswerSet,
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let project_dir = config::get_project_dir(&args.project_dir);
    debug!("Project directory: `{project_dir}`");

    let state = file_handling::load_project_state(&project_dir, &args.build_dir)?;
    debug!(
        "Compiled contracts: {}",
        state.artifacts.contract_names().join(", ")
    );

    let interactive = !args.no_interactive;

    match &args.command {
        CommandArgs::Contracts { source } => run_contracts(&state, source),
        CommandArgs::Methods { contract } => run_methods(&state, contract),
        CommandArgs::Call {
            network,
            proxy,
            contract,
            method,
            args: call_args,
        } => run_call(
            &state,
            &project_dir,
            interactive,
            network,
            proxy,
            contract,
            method,
            call_args,
        ),
    }
}

fn print_choice_items(items: &[ChoiceItem]) {
    for item in items {
        match item {
            ChoiceItem::Separator(label) => println!("--- {label} ---"),
            ChoiceItem::Choice(choice) => println!("{}", choice.label),
        }
    }
}

fn run_contracts(state: &ProjectState, source: &str) -> Result<()> {
    let items = catalog::list_contracts(state, source);

    if items.is_empty() {
        println!("No contracts available from source `{source}`.");
        return Ok(());
    }

    print_choice_items(&items);
    Ok(())
}

fn run_methods(state: &ProjectState, contract: &str) -> Result<()> {
    let items = catalog::methods_for(state, contract);

    if items.is_empty() {
        println!("No methods known for `{contract}`.");
        return Ok(());
    }

    print_choice_items(&items);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_call(
    state: &ProjectState,
    project_dir: &str,
    interactive: bool,
    network: &str,
    proxy: &Option<String>,
    contract: &Option<String>,
    method: &Option<String>,
    raw_args: &[String],
) -> Result<()> {
    let network_path = config::get_network_path(project_dir, network);
    let network_file = file_handling::get_network_file(&network_path)?;

    let mut prompter = StdinPrompter;

    let mut resolved = resolve_proxy_from_flags(state, &network_file, proxy, contract);
    if resolved.proxy_reference.is_none() {
        resolved = prompt_for_proxy(state, &network_file, interactive, &mut prompter)?;
    }

    let method = resolve_method(state, &resolved, method, interactive, &mut prompter)?;
    let args = resolve_arguments(
        state,
        &resolved,
        method.as_ref(),
        raw_args,
        interactive,
        &mut prompter,
    )?;

    let plan = CallPlan {
        network: network.to_string(),
        proxy: resolved,
        method,
        args,
    };

    let rendered = serde_yaml::to_string(&plan)
        .map_err(|e| Error::Misc(format!("Could not render call plan: {e}")))?;
    print!("{rendered}");

    Ok(())
}

/// Resolves the proxy reference from the `--proxy`/`--contract` flags alone.
fn resolve_proxy_from_flags(
    state: &ProjectState,
    network_file: &NetworkFile,
    proxy: &Option<String>,
    contract: &Option<String>,
) -> ResolvedProxy {
    let contract = contract.as_deref().map(ContractFullName::parse);

    let info = ContractRef {
        contract_alias: contract.as_ref().map(|name| name.alias.clone()),
        package_name: contract.and_then(|name| name.package),
        proxy_address: proxy.clone(),
    };

    proxies::resolve_one(&info, network_file, state.local_package())
}

/// Asks which proxy to target: first the display mode, then the grouped
/// proxy list, in one batched round.
fn prompt_for_proxy(
    state: &ProjectState,
    network_file: &NetworkFile,
    interactive: bool,
    prompter: &mut dyn Prompter,
) -> Result<ResolvedProxy> {
    let local_package = state.local_package();

    let mut opts = AnswerSet::new();
    opts.insert(PICK_MODE_QUESTION.to_string(), None);
    opts.insert("proxy".to_string(), None);

    let mut props = IndexMap::new();
    props.insert(
        PICK_MODE_QUESTION.to_string(),
        QuestionSpec::select(
            PICK_MODE_QUESTION,
            "Pick a proxy by",
            vec![
                ChoiceItem::choice("By name", AnswerValue::text(PICK_BY_NAME)),
                ChoiceItem::choice("By address", AnswerValue::text(PICK_BY_ADDRESS)),
            ],
        )
        .with_default(AnswerValue::text(PICK_BY_NAME)),
    );
    props.insert(
        "proxy".to_string(),
        QuestionSpec::text("proxy", "Pick a proxy instance").with_choices(
            proxies::proxy_choices_by_package(network_file, local_package, PICK_MODE_QUESTION),
        ),
    );

    let answers = resolver::resolve(
        &AnswerSet::new(),
        &opts,
        &props,
        &IndexMap::new(),
        interactive,
        prompter,
    )?;

    let Some(Some(reference)) = answers.get("proxy") else {
        // Nothing picked (no proxies on this network, or non-interactive)
        return Ok(ResolvedProxy::default());
    };

    let reference = reference.to_string();
    let info = if reference.starts_with("0x") {
        ContractRef {
            proxy_address: Some(reference),
            ..ContractRef::default()
        }
    } else {
        let name = ContractFullName::parse(&reference);
        ContractRef {
            contract_alias: Some(name.alias),
            package_name: name.package,
            ..ContractRef::default()
        }
    };

    Ok(proxies::resolve_one(
        &info,
        network_file,
        state.local_package(),
    ))
}

/// Resolves which method to call. A `--method` flag passes through and is
/// normalized to the introspected method when the contract is known.
fn resolve_method(
    state: &ProjectState,
    resolved: &ResolvedProxy,
    method: &Option<String>,
    interactive: bool,
    prompter: &mut dyn Prompter,
) -> Result<Option<AnswerValue>> {
    let supplied = method
        .as_ref()
        .map(|name| AnswerValue::text(name.clone()));

    let Some(full_name) = resolved.contract_full_name.as_deref() else {
        // Without a contract there is no interface to pick from
        return Ok(supplied.map(|value| match value {
            AnswerValue::Text(name) => AnswerValue::Method(MethodRef {
                name,
                selector: None,
            }),
            other => other,
        }));
    };

    let items = catalog::methods_for(state, full_name);
    let method_refs: Vec<MethodRef> = items
        .iter()
        .filter_map(|item| match item {
            ChoiceItem::Choice(choice) => match &choice.value {
                AnswerValue::Method(method_ref) => Some(method_ref.clone()),
                AnswerValue::Text(_) => None,
            },
            ChoiceItem::Separator(_) => None,
        })
        .collect();

    let mut opts = AnswerSet::new();
    opts.insert("method".to_string(), supplied);

    let mut props = IndexMap::new();
    props.insert(
        "method".to_string(),
        QuestionSpec::text("method", "Select a method")
            .with_choices(ChoiceSource::Static(items))
            .with_normalize(Box::new(move |value| match value {
                AnswerValue::Text(name) => match method_refs
                    .iter()
                    .find(|method_ref| method_ref.name == name)
                {
                    Some(method_ref) => AnswerValue::Method(method_ref.clone()),
                    None => AnswerValue::Method(MethodRef {
                        name,
                        selector: None,
                    }),
                },
                other => other,
            })),
    );

    let answers = resolver::resolve(
        &AnswerSet::new(),
        &opts,
        &props,
        &IndexMap::new(),
        interactive,
        prompter,
    )?;

    Ok(answers.get("method").cloned().flatten())
}

/// Resolves the method's argument values: supplied `--arg` values pass
/// through, everything else is prompted for.
fn resolve_arguments(
    state: &ProjectState,
    resolved: &ResolvedProxy,
    method: Option<&AnswerValue>,
    raw_args: &[String],
    interactive: bool,
    prompter: &mut dyn Prompter,
) -> Result<AnswerSet> {
    let supplied = cli_args::parse_named_values(raw_args)?;

    let arg_names = match (resolved.contract_full_name.as_deref(), method) {
        (Some(full_name), Some(AnswerValue::Method(method_ref))) => {
            catalog::arg_names_for(state, full_name, method_ref)
        }
        (Some(full_name), Some(AnswerValue::Text(name))) => catalog::arg_names_for(
            state,
            full_name,
            &MethodRef {
                name: name.clone(),
                selector: None,
            },
        ),
        _ => Vec::new(),
    };

    for name in supplied.keys() {
        if !arg_names.iter().any(|arg_name| arg_name == name) {
            warn!("Supplied argument `{name}` is not an input of the selected method");
        }
    }

    let mut args = AnswerSet::new();
    let mut props = IndexMap::new();
    for name in &arg_names {
        args.insert(
            name.clone(),
            supplied.get(name).map(|value| AnswerValue::text(value.clone())),
        );
        props.insert(
            name.clone(),
            QuestionSpec::text(name.clone(), format!("Value for `{name}`")),
        );
    }

    resolver::resolve(
        &args,
        &AnswerSet::new(),
        &props,
        &IndexMap::new(),
        interactive,
        prompter,
    )
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
