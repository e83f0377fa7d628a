//! User-visible message templates.

/// Message shown inside the dialog while the start precondition fails.
pub fn precondition_failure(reason: &str) -> String {
    format!("Can not start mob programming session. ({reason})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_the_reason() {
        let msg = precondition_failure("wip branch is not set");
        assert!(msg.contains("wip branch is not set"));
        assert!(msg.starts_with("Can not start"));
    }

    #[test]
    fn empty_reason_still_formats() {
        assert_eq!(
            precondition_failure(""),
            "Can not start mob programming session. ()"
        );
    }
}
