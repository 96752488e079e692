pub mod capability;
pub mod milestone;
pub mod priority;
pub mod quick_win;
pub mod widget;

pub use capability::{Capability, MaturityLevel};
pub use milestone::{Milestone, MilestoneStatus};
pub use priority::Priority;
pub use quick_win::{QuickWin, QuickWinStatus};
pub use widget::{default_widgets, WidgetKind, WidgetPreference};
