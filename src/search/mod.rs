//! Relevance-ranked search across capabilities, milestones, and quick wins.

mod ranker;
mod state;

pub use ranker::{
    rank_group, search_snapshot, EntityKind, GroupedResults, SearchHit, Searchable,
};
pub use state::SearchState;
