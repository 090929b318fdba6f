pub mod button;
pub mod input;
pub mod label;
pub mod selection;

pub use button::Button;
pub use input::{Input, InputOptions};
pub use label::Label;
pub use selection::SelectionGroup;
