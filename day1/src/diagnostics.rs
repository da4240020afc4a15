use tracing::{error, warn};

use crate::input::InputError;

/// Where input problems go. Nothing reported here affects the totals or
/// the exit status.
pub trait Diagnostics {
    fn report(&mut self, error: &InputError);
}

/// Forwards every report to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&mut self, err: &InputError) {
        match err {
            InputError::Parse { line, text, .. } => {
                warn!(line = *line, text = text.as_str(), "skipping line: {}", err)
            }
            InputError::Encoding { line, .. } => warn!(line = *line, "skipping line: {}", err),
            InputError::Open { .. } | InputError::Read { .. } => error!("{}", err),
        }
    }
}

/// Keeps the rendered messages in memory.
#[derive(Debug, Default)]
pub struct Collected {
    pub messages: Vec<String>,
}

impl Diagnostics for Collected {
    fn report(&mut self, err: &InputError) {
        self.messages.push(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_mass;

    #[test]
    fn test_collected() {
        let mut diagnostics = Collected::default();
        let err = parse_mass(2, "x").unwrap_err();
        diagnostics.report(&err);
        TracingDiagnostics.report(&err);

        assert_eq!(diagnostics.messages.len(), 1);
        assert!(diagnostics.messages[0].contains("line 2"));
    }
}
