use std::path::PathBuf;

use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use tabmove_core::host::{MenuItem, Window};
use tabmove_core::menu::{
    DisabledReason, Dispatch, IgnoreReason, MenuController, MenuPhase, Outcome,
};

use super::load_config;
use crate::scenario::{Scenario, Step};
use crate::table::{WindowFormatter, print_menu};

#[derive(Serialize)]
struct StepReport {
    index: usize,
    step: Step,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
}

#[derive(Serialize)]
struct SimulationReport {
    steps: Vec<StepReport>,
    phase: MenuPhase,
    windows: Vec<Window>,
    menus: Vec<MenuItem>,
}

pub(crate) fn handle_simulate_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<PathBuf>("scenario")
        .ok_or("Scenario argument is required")?;
    let json_output = matches.get_flag("json");

    let config = load_config(matches)?;
    let scenario = Scenario::load(path)?;
    info!(
        event = "cli.simulate_started",
        path = %path.display(),
        windows = scenario.windows.len(),
        steps = scenario.steps.len()
    );

    let browser = scenario.browser()?;
    let mut controller = MenuController::start(browser, config);
    let root_id = controller.config().menu.root_id.clone();

    let mut reports = Vec::with_capacity(scenario.steps.len());
    for (index, step) in scenario.steps.into_iter().enumerate() {
        let event = step.apply(index, controller.host_mut())?;
        let outcome = event.map(|e| controller.dispatch(e));
        reports.push(StepReport {
            index,
            step,
            outcome,
        });
    }

    info!(event = "cli.simulate_completed", steps = reports.len());

    let phase = controller.phase();
    let host = controller.into_host();

    if json_output {
        let report = SimulationReport {
            steps: reports,
            phase,
            windows: host.windows().to_vec(),
            menus: host.menus().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for report in &reports {
        match &report.outcome {
            Some(outcome) => println!(
                "{:>3}. {:<28} -> {}",
                report.index + 1,
                report.step.describe(),
                describe_outcome(outcome)
            ),
            None => println!("{:>3}. {}", report.index + 1, report.step.describe()),
        }
    }
    println!();
    print_menu(host.menus(), &root_id);
    println!();
    WindowFormatter::new(host.windows()).print_windows(host.windows());

    Ok(())
}

fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::RootInstalled => "root menu installed".to_string(),
        Outcome::RootInstallFailed { error } => format!("root install failed: {}", error),
        Outcome::Ignored { reason } => {
            let why = match reason {
                IgnoreReason::NotTabContext => "not a tab context",
                IgnoreReason::NotWindowEntry => "not a window entry",
                IgnoreReason::UnknownEntry => "unknown entry",
                IgnoreReason::NoSelection => "no selection",
            };
            format!("ignored ({})", why)
        }
        Outcome::SubmenuDisabled { reason, tab_count } => match reason {
            DisabledReason::NoSelection => "disabled (nothing to move)".to_string(),
            DisabledReason::NoOtherWindows => {
                format!("disabled (no other windows, {} tab(s))", tab_count)
            }
        },
        Outcome::SubmenuBuilt { tab_count, targets } => format!(
            "{} tab(s) -> {} target window(s) {:?}",
            tab_count,
            targets.len(),
            targets
        ),
        Outcome::SubmenuFailed { error } => format!("submenu failed: {}", error),
        Outcome::MenuReset => "menu reset".to_string(),
        Outcome::TabsMoved { tab_ids, window_id } => {
            format!("moved {:?} to window {}", tab_ids, window_id)
        }
        Outcome::MoveFailed { stage, error } => format!("move failed at {}: {}", stage, error),
    }
}
