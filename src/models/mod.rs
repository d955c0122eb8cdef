pub mod checklist;
pub mod daily_table;
pub mod hour;
pub mod reading;
pub mod shift;

pub use checklist::{ChecklistCatalog, ChecklistItem};
pub use daily_table::{DailyTable, GridView, TableRow, ViewRow};
pub use hour::HourBucket;
pub use reading::Reading;
pub use shift::Shift;
