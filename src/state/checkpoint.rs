//! Two-factor checkpoint form state.
//!
//! DESIGN
//! ======
//! The checkpoint screen owns exactly one piece of local state: the field
//! values, the "device missing" mode flag, and whether a verification request
//! is in flight. Every transition is a plain method so the screen's behavior
//! can be exercised without a browser; the page component only wraps this in
//! an `RwSignal`.

#[cfg(test)]
#[path = "checkpoint_test.rs"]
mod checkpoint_test;

/// Which credential the user is entering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckpointMode {
    /// One-time code generated by the user's authenticator device.
    #[default]
    DeviceCode,
    /// Backup code issued when two-factor auth was enabled.
    RecoveryCode,
}

impl CheckpointMode {
    /// Form field name bound to the visible input.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::DeviceCode => "code",
            Self::RecoveryCode => "recoveryCode",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::DeviceCode => "Login Code",
            Self::RecoveryCode => "Recovery Code",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::DeviceCode => "Enter the two-factor token generated by your device.",
            Self::RecoveryCode => {
                "Enter one of the recovery codes generated when you set up two-factor \
                 authentication on this account in order to continue."
            }
        }
    }

    /// Label of the link that switches to the other mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::DeviceCode => "I've Lost My Device",
            Self::RecoveryCode => "I Have My Device",
        }
    }

    pub fn is_missing_device(self) -> bool {
        self == Self::RecoveryCode
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::DeviceCode => Self::RecoveryCode,
            Self::RecoveryCode => Self::DeviceCode,
        }
    }
}

/// Identifies one of the two checkpoint inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckpointField {
    Code,
    RecoveryCode,
}

/// Raw values of both inputs. Only the one matching the current mode is
/// ever non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckpointValues {
    pub code: String,
    pub recovery_code: String,
}

/// The three values handed to the verification call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckpointRequest {
    pub token: String,
    pub code: String,
    pub recovery_code: String,
}

/// How a submission attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Login finished; the browser is navigating to the contained target.
    Redirected(String),
    /// Server accepted the request but login is not complete yet.
    Incomplete,
    /// The verification call failed and the error was reported.
    Failed,
}

/// Local form state for the checkpoint screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckpointForm {
    token: String,
    pub values: CheckpointValues,
    pub mode: CheckpointMode,
    pub submitting: bool,
}

impl CheckpointForm {
    /// Fresh form bound to the pending login's session token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            values: CheckpointValues::default(),
            mode: CheckpointMode::default(),
            submitting: false,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The input currently shown to the user.
    pub fn active_field(&self) -> CheckpointField {
        match self.mode {
            CheckpointMode::DeviceCode => CheckpointField::Code,
            CheckpointMode::RecoveryCode => CheckpointField::RecoveryCode,
        }
    }

    pub fn value(&self, field: CheckpointField) -> &str {
        match field {
            CheckpointField::Code => &self.values.code,
            CheckpointField::RecoveryCode => &self.values.recovery_code,
        }
    }

    pub fn active_value(&self) -> &str {
        self.value(self.active_field())
    }

    pub fn set_field(&mut self, field: CheckpointField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CheckpointField::Code => self.values.code = value,
            CheckpointField::RecoveryCode => self.values.recovery_code = value,
        }
    }

    /// Write into whichever input is visible.
    pub fn set_active_value(&mut self, value: impl Into<String>) {
        self.set_field(self.active_field(), value);
    }

    /// Flip between device and recovery mode, clearing both inputs.
    pub fn toggle_missing_device(&mut self) {
        self.values = CheckpointValues::default();
        self.mode = self.mode.toggled();
    }

    /// Enter the submitting state and return the request to send.
    ///
    /// Returns `None` while a previous request is still in flight.
    pub fn begin_submit(&mut self) -> Option<CheckpointRequest> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(CheckpointRequest {
            token: self.token.clone(),
            code: self.values.code.clone(),
            recovery_code: self.values.recovery_code.clone(),
        })
    }

    /// Apply the result of a submission.
    ///
    /// A redirect leaves the form disabled until the page unloads; anything
    /// else re-arms it for another attempt.
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.submitting = matches!(outcome, SubmitOutcome::Redirected(_));
    }
}

/// Token attached to the current navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub token: Option<String>,
}

impl NavigationState {
    /// The session token, treating an empty string as missing.
    pub fn required_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
