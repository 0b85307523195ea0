use chrono::{DateTime, Local};
use pf_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
