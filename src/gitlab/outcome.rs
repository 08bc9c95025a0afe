/// Error messages GitLab returns when the desired state already holds.
/// Responses carrying one of these are treated as success so that re-runs
/// stay idempotent.
pub const BENIGN_MESSAGES: [&str; 2] = [
    "Runner was already enabled for this project",
    "404 Project Not Found",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    BenignFailure,
    FatalFailure,
}

pub fn classify(status: u16, message: Option<&str>) -> Outcome {
    if status < 400 {
        return Outcome::Success;
    }

    match message {
        Some(message) if BENIGN_MESSAGES.contains(&message) => Outcome::BenignFailure,
        _ => Outcome::FatalFailure,
    }
}
