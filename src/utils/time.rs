use chrono::{DateTime, Datelike, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn current_year() -> i32 {
    now().year()
}
