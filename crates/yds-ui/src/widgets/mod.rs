mod badge;
mod bottom_sheet;
mod box_button;
mod search_bar;
mod text_field;
mod tooltip;

pub use badge::*;
pub use bottom_sheet::*;
pub use box_button::*;
pub use search_bar::*;
pub use text_field::*;
pub use tooltip::*;
