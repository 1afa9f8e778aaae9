/// Formats a duration in milliseconds as `HH:MM:SS`.
///
/// Negative input is treated as zero and hours keep counting past 24.
pub fn format_elapsed(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
