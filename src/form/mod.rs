mod field;
mod state;
mod validate;

pub use field::FieldState;
pub use state::FormState;
pub use validate::{REQUIRED_MESSAGE, validate};
