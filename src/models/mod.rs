pub mod conflict;
pub mod days_of_week;
pub mod kpi;
pub mod occupancy;
pub mod schedule;
pub mod snapshot;
pub mod suggestion;

pub use conflict::{Conflict, Severity};
pub use days_of_week::{weekday_short_name, DaysOfWeek};
pub use kpi::KpiSnapshot;
pub use occupancy::OccupiedInterval;
pub use schedule::{Priority, ScheduleEntry, TrainType};
pub use snapshot::Snapshot;
pub use suggestion::{Action, Suggestion};
