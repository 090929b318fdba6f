use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("images of selected and unselected markers must have equal size, got {unselected:?} and {selected:?}")]
    MarkerSizeMismatch {
        unselected: (u32, u32),
        selected: (u32, u32),
    },

    #[error("selection group needs at least one option")]
    NoOptions,

    #[error("text rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
