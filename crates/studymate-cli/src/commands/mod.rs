pub mod auth;
pub mod config;
pub mod countdown;
pub mod news;
pub mod pomodoro;
pub mod predict;
pub mod session;
pub mod syllabus;
pub mod task;
pub mod timer;
pub mod tools;

/// Format a second count as H:MM:SS (hours omitted when zero).
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_hms;

    #[test]
    fn formats_without_hours() {
        assert_eq!(format_hms(0), "0:00");
        assert_eq!(format_hms(65), "1:05");
        assert_eq!(format_hms(1500), "25:00");
    }

    #[test]
    fn formats_with_hours() {
        assert_eq!(format_hms(3600), "1:00:00");
        assert_eq!(format_hms(3725), "1:02:05");
    }
}
