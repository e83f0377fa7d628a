/// Externally computed answer to "may a session start right now".
/// The dialog only consumes the verdict; it never derives one itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Precondition {
    pub can_execute: bool,
    pub reason: Option<String>,
}

impl Precondition {
    pub fn ok() -> Self {
        Self {
            can_execute: true,
            reason: None,
        }
    }

    pub fn blocked(reason: impl Into<String>) -> Self {
        Self {
            can_execute: false,
            reason: Some(reason.into()),
        }
    }
}

/// Mob session settings owned by the surrounding tooling. The branch names
/// gate whether a session may start; the rest pre-fills the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobSettings {
    pub remote_name: String,
    pub base_branch: String,
    pub wip_branch: String,
    pub timer_minutes: u32,
    pub timer_sound: bool,
    pub start_with_share: bool,
}

impl Default for MobSettings {
    fn default() -> Self {
        Self {
            remote_name: "origin".to_string(),
            base_branch: "main".to_string(),
            wip_branch: "mob-session".to_string(),
            timer_minutes: 10,
            timer_sound: false,
            start_with_share: false,
        }
    }
}

impl MobSettings {
    /// Checks the settings a start would need. Returns the first failure
    /// with its reason; reasons end up verbatim in the dialog message.
    pub fn validate_for_start(&self) -> Precondition {
        if self.remote_name.trim().is_empty() {
            return Precondition::blocked("remote name is not set");
        }
        if self.base_branch.trim().is_empty() {
            return Precondition::blocked("base branch is not set");
        }
        if self.wip_branch.trim().is_empty() {
            return Precondition::blocked("wip branch is not set");
        }
        if self.base_branch == self.wip_branch {
            return Precondition::blocked("base branch and wip branch must differ");
        }
        Precondition::ok()
    }
}
