use serde::Serialize;

/// Terminal outcome of the start dialog. Set exactly once; the dialog
/// accepts no further input after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum StartDecision {
    Confirmed,
    Cancelled,
    OpenSettings,
}

/// Values collected by the dialog, handed to the surrounding session
/// tooling once the user confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStartRequest {
    pub timer_minutes: u32,
    pub timer_sound: bool,
    pub start_with_share: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_display_names() {
        assert_eq!(StartDecision::Confirmed.to_string(), "Confirmed");
        assert_eq!(StartDecision::Cancelled.to_string(), "Cancelled");
        assert_eq!(StartDecision::OpenSettings.to_string(), "OpenSettings");
    }

    #[test]
    fn request_serializes_to_json() {
        let request = SessionStartRequest {
            timer_minutes: 25,
            timer_sound: true,
            start_with_share: false,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"timer_minutes":25,"timer_sound":true,"start_with_share":false}"#
        );
    }
}
