use clap::{Parser, Subcommand};

use crate::validation::clap_id_validator;

const HELP_TEMPLATE: &str = "
   ▄▄
  ▟██▙
 ▟████▙  cairn
▐██████▌

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "cairn")]
#[command(about = "Operational-maturity roadmap tracker", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the .cairn/ data directory
    Init {
        /// Optional roadmap YAML file to seed the collections from
        roadmap_path: Option<String>,

        /// Remove an existing .cairn/ directory first
        #[arg(long)]
        clean: bool,
    },

    /// Manage capabilities
    Capability {
        #[command(subcommand)]
        command: CapabilityCommands,
    },

    /// Manage milestones
    Milestone {
        #[command(subcommand)]
        command: MilestoneCommands,
    },

    /// Manage quick wins
    Quickwin {
        #[command(subcommand)]
        command: QuickwinCommands,
    },

    /// Search capabilities, milestones, and quick wins
    Search {
        /// Free-text query (case-insensitive substring match)
        query: String,
    },

    /// Show which blocked milestones are waiting on incomplete dependencies
    Deps {
        /// Restrict the analysis to one capability
        #[arg(short, long, value_parser = clap_id_validator)]
        capability: Option<String>,
    },

    /// Dashboard rendering and widget preferences
    Dashboard {
        #[command(subcommand)]
        command: Option<DashboardCommands>,
    },
}

#[derive(Subcommand)]
pub enum CapabilityCommands {
    /// Add a capability
    Add {
        /// Display name
        name: String,

        /// Current maturity level (1-5)
        #[arg(short = 'l', long, default_value_t = 1)]
        current_level: u8,

        /// Target maturity level (1-5)
        #[arg(short = 't', long, default_value_t = 3)]
        target_level: u8,

        /// Owning person or team
        #[arg(short, long)]
        owner: Option<String>,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,

        /// Priority: low, medium, high, critical
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// List all capabilities
    List,

    /// Set a capability's current maturity level
    SetLevel {
        /// Capability id
        #[arg(value_parser = clap_id_validator)]
        id: String,

        /// New current level (1-5, at most the target level)
        level: u8,
    },

    /// Show one capability and its milestones
    Show {
        /// Capability id
        #[arg(value_parser = clap_id_validator)]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum MilestoneCommands {
    /// Add a milestone
    Add {
        /// Display name
        name: String,

        /// Owning capability id
        #[arg(short, long, value_parser = clap_id_validator)]
        capability: Option<String>,

        /// Milestone ids this one depends on
        #[arg(long = "depends", value_parser = clap_id_validator)]
        depends: Vec<String>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Priority: low, medium, high, critical
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// List milestones
    List {
        /// Filter by status: not_started, in_progress, completed, blocked
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Set a milestone's status
    SetStatus {
        /// Milestone id
        #[arg(value_parser = clap_id_validator)]
        id: String,

        /// New status: not_started, in_progress, completed, blocked
        status: String,
    },

    /// Add a dependency to a milestone
    Link {
        /// Milestone id
        #[arg(value_parser = clap_id_validator)]
        id: String,

        /// Milestone id it depends on
        #[arg(value_parser = clap_id_validator)]
        dependency: String,
    },

    /// Remove a dependency from a milestone
    Unlink {
        /// Milestone id
        #[arg(value_parser = clap_id_validator)]
        id: String,

        /// Dependency id to remove
        #[arg(value_parser = clap_id_validator)]
        dependency: String,
    },
}

#[derive(Subcommand)]
pub enum QuickwinCommands {
    /// Add a quick win
    Add {
        /// Display name
        name: String,

        /// Owning person or team
        #[arg(short, long)]
        owner: Option<String>,

        /// Priority: low, medium, high, critical
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// List all quick wins
    List,

    /// Set a quick win's status
    SetStatus {
        /// Quick win id
        #[arg(value_parser = clap_id_validator)]
        id: String,

        /// New status: planned, in_progress, done
        status: String,
    },
}

#[derive(Subcommand)]
pub enum DashboardCommands {
    /// Render the terminal dashboard (default)
    Show,

    /// List widget preferences
    Widgets,

    /// Flip one widget's visibility
    Toggle {
        /// Widget id, e.g. kpi-blocked or recent-activity
        id: String,
    },

    /// Move widgets to the front of the display order
    Reorder {
        /// Widget ids in the desired order
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Restore the default widget arrangement
    Reset,

    /// Set the dashboard theme
    Theme {
        /// Theme name, e.g. system, light, dark
        name: String,
    },
}
