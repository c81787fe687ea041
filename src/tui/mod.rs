//! Terminal widgets and styling shared by the search view.

pub mod input;
pub mod theme;

pub use input::SearchInput;
pub use theme::Theme;
