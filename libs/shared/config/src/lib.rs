use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_OPEN_HOUR: u32 = 9;
pub const DEFAULT_CLOSE_HOUR: u32 = 17;
pub const DEFAULT_SLOT_INTERVAL_MINUTES: u32 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub doctors_path: Option<PathBuf>,
    pub clinic_open_hour: u32,
    pub clinic_close_hour: u32,
    pub slot_interval_minutes: u32,
    pub hide_booked_slots: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            doctors_path: None,
            clinic_open_hour: DEFAULT_OPEN_HOUR,
            clinic_close_hour: DEFAULT_CLOSE_HOUR,
            slot_interval_minutes: DEFAULT_SLOT_INTERVAL_MINUTES,
            hide_booked_slots: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            bind_addr: parse_var("TELECARE_BIND_ADDR", defaults.bind_addr),
            doctors_path: env::var("TELECARE_DOCTORS_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            clinic_open_hour: parse_var("TELECARE_OPEN_HOUR", defaults.clinic_open_hour),
            clinic_close_hour: parse_var("TELECARE_CLOSE_HOUR", defaults.clinic_close_hour),
            slot_interval_minutes: parse_var(
                "TELECARE_SLOT_INTERVAL_MINUTES",
                defaults.slot_interval_minutes,
            ),
            hide_booked_slots: parse_var("TELECARE_HIDE_BOOKED_SLOTS", defaults.hide_booked_slots),
        };

        if !config.has_valid_clinic_hours() {
            warn!(
                "Clinic hours {}-{} every {} minutes will produce no bookable slots",
                config.clinic_open_hour, config.clinic_close_hour, config.slot_interval_minutes
            );
        }

        config
    }

    /// Whether the configured opening window yields at least one slot.
    pub fn has_valid_clinic_hours(&self) -> bool {
        clinic_hours_are_valid(
            self.clinic_open_hour,
            self.clinic_close_hour,
            self.slot_interval_minutes,
        )
    }
}

/// An opening window is usable when it opens before it closes, closes by
/// midnight and steps by a positive interval.
pub fn clinic_hours_are_valid(open_hour: u32, close_hour: u32, interval_minutes: u32) -> bool {
    open_hour < close_hour && close_hour <= 24 && interval_minutes > 0
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {:?}", key, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {:?}", key, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hours_are_valid() {
        let config = AppConfig::default();
        assert!(config.has_valid_clinic_hours());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn inverted_hours_are_invalid() {
        let config = AppConfig {
            clinic_open_hour: 17,
            clinic_close_hour: 9,
            ..AppConfig::default()
        };
        assert!(!config.has_valid_clinic_hours());
    }

    #[test]
    fn zero_interval_is_invalid() {
        let config = AppConfig {
            slot_interval_minutes: 0,
            ..AppConfig::default()
        };
        assert!(!config.has_valid_clinic_hours());
    }

    #[test]
    fn unparsable_value_falls_back_to_default() {
        env::set_var("TELECARE_TEST_UNPARSABLE_HOUR", "nine");
        let value: u32 = parse_var("TELECARE_TEST_UNPARSABLE_HOUR", 9);
        assert_eq!(value, 9);
        env::remove_var("TELECARE_TEST_UNPARSABLE_HOUR");
    }
}
