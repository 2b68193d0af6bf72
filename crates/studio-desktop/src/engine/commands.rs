//! Desktop commands: icons, background, settings and language

use log::{info, warn};

use super::{DesktopEngine, Effect};
use crate::desktop::{Background, DesktopCommand, DesktopSettings};
use crate::error::DesktopError;
use crate::i18n::Language;
use crate::math::Vec2;

impl DesktopEngine {
    /// Apply a desktop command.
    ///
    /// Admin-only commands from a non-admin are refused before any state
    /// changes.
    pub fn execute(&mut self, command: DesktopCommand) -> Result<Vec<Effect>, DesktopError> {
        if command.requires_admin() && !self.is_admin {
            warn!("{} for {:?}", DesktopError::AdminRequired, command);
            return Err(DesktopError::AdminRequired);
        }

        match command {
            DesktopCommand::ActivateIcon { icon_id } => {
                return self.activate_icon(&icon_id).map(|(_, effects)| effects);
            }
            DesktopCommand::OpenAdminPanel => {
                return self.open_admin_panel().map(|(_, effects)| effects);
            }
            DesktopCommand::CloseWindow { window_id } => {
                if !self.close_window(window_id) {
                    return Err(DesktopError::WindowNotFound(window_id));
                }
            }
            DesktopCommand::FocusWindow { window_id } => self.focus_window(window_id)?,
            DesktopCommand::ClearFocus => self.clear_focus(),
            DesktopCommand::MoveWindow { window_id, dx, dy } => {
                self.move_window_by(window_id, Vec2::new(dx, dy))?
            }
            DesktopCommand::ToggleIcon { icon_id } => {
                self.icons.toggle(&icon_id)?;
            }
            DesktopCommand::AddIcon { label, glyph } => {
                let icon = self.icons.add(&label, &glyph, self.now_ms)?;
                info!("added icon {} ({})", icon.id, icon.label);
            }
            DesktopCommand::RemoveIcon { icon_id } => {
                self.icons.remove(&icon_id)?;
            }
            DesktopCommand::ApplyBackgroundImage { url } => self.apply_background_image(url),
            DesktopCommand::UseSessionBackground { url } => {
                self.background = Background::Image(url);
            }
            DesktopCommand::ResetBackground => self.reset_background(),
            DesktopCommand::ApplySettings { settings } => self.apply_settings(settings),
            DesktopCommand::SetLanguage { language } => self.set_language(language),
        }
        Ok(Vec::new())
    }

    /// Switch the UI language
    pub fn set_language(&mut self, language: Language) {
        self.translator.set_language(language);
    }

    /// Replace the general settings
    pub fn apply_settings(&mut self, settings: DesktopSettings) {
        self.windows.set_single_instance(settings.single_instance);
        self.settings = settings;
    }

    /// Apply an image background and persist it for the next visit
    fn apply_background_image(&mut self, url: String) {
        if let Err(e) = self.local.set(&self.config.background_storage_key, &url) {
            warn!("background applied for this session only: {}", e);
        }
        info!("background image set to {}", url);
        self.background = Background::Image(url);
    }

    /// Back to the default gradient; the persisted image is forgotten
    pub fn reset_background(&mut self) {
        self.background = Background::Gradient(self.config.default_gradient.clone());
        if let Err(e) = self.local.remove(&self.config.background_storage_key) {
            warn!("could not clear persisted background: {}", e);
        }
    }
}
