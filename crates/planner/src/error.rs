use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PlannerError {
    #[error("Label '{0}' does not exist.")]
    LabelNotFound(String),

    #[error("Shortlist '{name}' does not exist for user {user_id}.")]
    ShortlistNotFound { name: String, user_id: String },

    #[error("Player search failed: {0}")]
    Search(String),
}
