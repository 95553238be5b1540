//!
//! Information associated with the comparison run.
//!

use chrono::DateTime;
use chrono::Local;

///
/// Information associated with the comparison run.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    /// Start of the comparison run.
    pub start: DateTime<Local>,
    /// End of the comparison run.
    pub end: DateTime<Local>,
    /// The host platform, e.g. `linux x86_64`.
    pub platform: String,
}

impl Metadata {
    /// The timestamp format used in reports.
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(start: DateTime<Local>, end: DateTime<Local>, platform: String) -> Self {
        Self {
            start,
            end,
            platform,
        }
    }

    ///
    /// Describes the current host.
    ///
    pub fn host_platform() -> String {
        format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
    }

    ///
    /// The formatted run start time.
    ///
    pub fn date(&self) -> String {
        self.start.format(Self::TIMESTAMP_FORMAT).to_string()
    }

    ///
    /// The run duration in seconds.
    ///
    pub fn duration_secs(&self) -> f64 {
        (self.end - self.start)
            .to_std()
            .map(|duration| duration.as_secs_f64())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Local;
    use chrono::TimeZone;

    use super::Metadata;

    #[test]
    fn date_and_duration() {
        let start = Local
            .with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
            .single()
            .expect("Always valid");
        let end = start + Duration::milliseconds(1500);

        let metadata = Metadata::new(start, end, Metadata::host_platform());

        assert_eq!(metadata.date(), "2026-10-19 12:00:00");
        assert_eq!(metadata.duration_secs(), 1.5);
        assert!(!metadata.platform.is_empty());
    }

    #[test]
    fn reversed_duration_is_zero() {
        let end = Local::now();
        let start = end + Duration::seconds(1);

        assert_eq!(Metadata::new(start, end, String::new()).duration_secs(), 0.0);
    }
}
