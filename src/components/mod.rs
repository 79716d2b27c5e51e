//! Presentational Components

mod alert;
mod buttons;
mod card;
mod dialog;
mod field_input;
mod math;
mod parameter_input;
mod progress_bar;
mod restart_after_update;
mod tab_bar;
mod update_available;
mod user_agreement;

pub use alert::*;
pub use buttons::*;
pub use card::*;
pub use dialog::*;
pub use field_input::*;
pub use math::*;
pub use parameter_input::*;
pub use progress_bar::*;
pub use restart_after_update::*;
pub use tab_bar::*;
pub use update_available::*;
pub use user_agreement::*;
