use chrono::{DateTime, Local};

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
