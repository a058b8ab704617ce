//! URLs a session page links or embeds.

use chrono::NaiveDate;

use crate::constants::{OPENFEEDBACK_BASE_URL, OPENFEEDBACK_QUERY, YOUTUBE_WATCH_URL};

/// Embed URL of the feedback widget for one session.
pub fn feedback_url(project: &str, date: NaiveDate, feedback_id: &str) -> String {
    format!(
        "{}/{}/{}/{}?{}",
        OPENFEEDBACK_BASE_URL,
        project,
        date.format("%Y-%m-%d"),
        feedback_id,
        OPENFEEDBACK_QUERY
    )
}

/// Watch URL of a recording, opened inside the conference playlist.
pub fn youtube_url(video_id: &str, playlist: &str) -> String {
    format!("{}?v={}&list={}", YOUTUBE_WATCH_URL, video_id, playlist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_url() {
        let date = NaiveDate::from_ymd_opt(2022, 10, 20).unwrap();
        assert_eq!(
            feedback_url("p32EOIbP5bj4WDdz8bJs", date, "xyz"),
            "https://openfeedback.io/p32EOIbP5bj4WDdz8bJs/2022-10-20/xyz?hideHeader=true&forceColorScheme=dark"
        );
    }

    #[test]
    fn test_youtube_url() {
        assert_eq!(
            youtube_url("dQw4w9WgXcQ", "PLuZ_sYdawLiUHU4E1i5RrFsRN_lQcgPwT"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLuZ_sYdawLiUHU4E1i5RrFsRN_lQcgPwT"
        );
    }
}
