use anyhow::Result;
use std::path::PathBuf;

use crate::commands::{capability, dashboard, deps, init, milestone, quickwin, search};
use crate::models::{MilestoneStatus, Priority, QuickWinStatus};

use super::types::{
    CapabilityCommands, Commands, DashboardCommands, MilestoneCommands, QuickwinCommands,
};

fn parse_priority(priority: Option<String>) -> Result<Option<Priority>> {
    priority.map(|p| p.parse::<Priority>()).transpose()
}

pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Init {
            roadmap_path,
            clean,
        } => init::execute(roadmap_path.map(PathBuf::from), clean),
        Commands::Capability { command } => match command {
            CapabilityCommands::Add {
                name,
                current_level,
                target_level,
                owner,
                description,
                priority,
            } => capability::add(
                name,
                current_level,
                target_level,
                owner,
                description,
                parse_priority(priority)?,
            ),
            CapabilityCommands::List => capability::list(),
            CapabilityCommands::SetLevel { id, level } => capability::set_level(id, level),
            CapabilityCommands::Show { id } => capability::show(id),
        },
        Commands::Milestone { command } => match command {
            MilestoneCommands::Add {
                name,
                capability,
                depends,
                notes,
                priority,
            } => milestone::add(name, capability, depends, notes, parse_priority(priority)?),
            MilestoneCommands::List { status } => {
                let status = status.map(|s| s.parse::<MilestoneStatus>()).transpose()?;
                milestone::list(status)
            }
            MilestoneCommands::SetStatus { id, status } => {
                milestone::set_status(id, status.parse::<MilestoneStatus>()?)
            }
            MilestoneCommands::Link { id, dependency } => milestone::link(id, dependency),
            MilestoneCommands::Unlink { id, dependency } => milestone::unlink(id, dependency),
        },
        Commands::Quickwin { command } => match command {
            QuickwinCommands::Add {
                name,
                owner,
                priority,
            } => quickwin::add(name, owner, parse_priority(priority)?),
            QuickwinCommands::List => quickwin::list(),
            QuickwinCommands::SetStatus { id, status } => {
                quickwin::set_status(id, status.parse::<QuickWinStatus>()?)
            }
        },
        Commands::Search { query } => search::execute(query),
        Commands::Deps { capability } => deps::execute(capability),
        Commands::Dashboard { command } => match command.unwrap_or(DashboardCommands::Show) {
            DashboardCommands::Show => dashboard::show(),
            DashboardCommands::Widgets => dashboard::widgets(),
            DashboardCommands::Toggle { id } => dashboard::toggle(id),
            DashboardCommands::Reorder { ids } => dashboard::reorder(ids),
            DashboardCommands::Reset => dashboard::reset(),
            DashboardCommands::Theme { name } => dashboard::theme(name),
        },
    }
}
