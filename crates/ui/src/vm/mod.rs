mod checklist_vm;
mod dashboard_vm;
mod quiz_vm;
mod time_fmt;

pub use checklist_vm::{ChecklistRowVm, map_checklist_rows};
pub use dashboard_vm::{StatTileVm, TopicBarVm, map_stat_tiles, map_topic_bars};
pub use quiz_vm::{QuestionStatus, QuizVm};
pub use time_fmt::format_mm_ss;
