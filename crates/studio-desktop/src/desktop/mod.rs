//! Desktop-wide state owned by the engine
//!
//! Icons, background, settings and the commands that change them.

mod icons;
mod background;
mod settings;
mod command;
mod toolbar;

pub use icons::{DesktopIcon, IconSet};
pub use background::{Background, BackgroundStyle};
pub use settings::DesktopSettings;
pub use command::DesktopCommand;
pub use toolbar::{LanguageOption, Toolbar};
