pub mod cards;
pub mod hero;
pub mod menu;
pub mod ribbon;
pub mod status_bar;

pub use cards::CardsWidget;
pub use hero::HeroWidget;
pub use menu::MenuWidget;
pub use ribbon::{RibbonWidget, Side};
pub use status_bar::StatusBarWidget;
