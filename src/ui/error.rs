//! Error reporting for the CLI

use crossterm::style::Stylize;
use fueleu::{ErrorCategory, FuelEuError};

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::terminal::detect_capabilities;

/// Exit status: 2 for rule violations, 1 for everything else
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<FuelEuError>() {
        Some(fueleu) => fueleu.category().exit_code() as u8,
        None => ErrorCategory::Infrastructure.exit_code() as u8,
    }
}

pub fn format_error(err: &anyhow::Error, color: bool) -> String {
    let label = match err.downcast_ref::<FuelEuError>() {
        Some(fueleu) => format!("Error [{}]", fueleu.code()),
        None => "Error".to_string(),
    };
    let label = if color {
        label.red().bold().to_string()
    } else {
        label
    };
    format!("{label}: {err:#}\n")
}

pub fn print_error(err: &anyhow::Error, json: bool, command: &str) {
    if json {
        let (code, category) = match err.downcast_ref::<FuelEuError>() {
            Some(fueleu) => (fueleu.code(), fueleu.category()),
            None => ("INTERNAL", ErrorCategory::Infrastructure),
        };
        let event = ErrorEvent::new(command, code, category.as_str(), format!("{err:#}"));
        if emit_event(&event).is_ok() {
            return;
        }
    }

    let color = detect_capabilities().supports_color;
    eprint!("{}", format_error(err, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use fueleu::DomainError;

    #[test]
    fn domain_errors_exit_with_two() {
        let err = anyhow::Error::new(FuelEuError::from(DomainError::NoBaselineSet));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn other_errors_exit_with_one() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn format_error_includes_code() {
        let err = anyhow::Error::new(FuelEuError::from(DomainError::PoolNetNegative {
            net_cb: -100.0,
        }));
        assert_eq!(
            format_error(&err, false),
            "Error [POOL_NET_NEGATIVE]: pool net CB is negative: -100. Sum must be >= 0\n"
        );
    }
}
