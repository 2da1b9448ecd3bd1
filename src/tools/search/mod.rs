//! Search tools - query, lookup and coaching

mod get_situation;
mod search_situations;
mod talk_to_me;

pub use get_situation::GetSituationTool;
pub use search_situations::SearchSituationsTool;
pub use talk_to_me::TalkToMeTool;
