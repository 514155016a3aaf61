use gtk::gdk;
use gtk4 as gtk;
use std::collections::HashMap;
use std::time::Duration;

pub const APP_ID: &str = "org.example.LinkShortener";

const TINYURL_API: &str = "https://tinyurl.com/api-create.php";

/// Fixed application settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shortening endpoint; the link is appended as the `url` query parameter
    pub api_base: String,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Side length of the spinning emblem
    pub emblem_size: i32,
    pub animation_interval: Duration,
    /// Radians added to the emblem rotation on every tick
    pub rotation_step: f64,
    /// Themed icon shown by the window manager
    pub icon_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: TINYURL_API.to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("link-shortener/{}", env!("CARGO_PKG_VERSION")),
            window_width: 360,
            window_height: 225,
            emblem_size: 120,
            animation_interval: Duration::from_millis(20),
            rotation_step: 0.05,
            icon_name: "insert-link".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Submit,
    Copy,
    Quit,
}

impl Action {
    pub fn label(&self) -> &str {
        match self {
            Action::Submit => "Shorten URL",
            Action::Copy => "Copy to Clipboard",
            Action::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: gdk::Key,
    pub modifiers: gdk::ModifierType,
}

#[derive(Debug, Clone)]
pub struct ShortcutConfig {
    bindings: HashMap<Action, Shortcut>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::Submit,
            Shortcut {
                key: gdk::Key::Return,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        // Shift turns the keyval upper case
        bindings.insert(
            Action::Copy,
            Shortcut {
                key: gdk::Key::C,
                modifiers: gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::SHIFT_MASK,
            },
        );
        bindings.insert(
            Action::Quit,
            Shortcut {
                key: gdk::Key::q,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );

        Self { bindings }
    }
}

impl ShortcutConfig {
    pub fn get_action(&self, key: gdk::Key, modifiers: gdk::ModifierType) -> Option<Action> {
        // Filter out irrelevant modifiers like NumLock/CapsLock/ScrollLock
        let mask = gdk::ModifierType::CONTROL_MASK
            | gdk::ModifierType::SHIFT_MASK
            | gdk::ModifierType::ALT_MASK
            | gdk::ModifierType::SUPER_MASK
            | gdk::ModifierType::META_MASK;

        let clean_mods = modifiers & mask;

        for (action, shortcut) in &self.bindings {
            if shortcut.key == key && shortcut.modifiers == clean_mods {
                return Some(*action);
            }

            // Keypad Enter submits too
            if *action == Action::Submit
                && key == gdk::Key::KP_Enter
                && shortcut.key == gdk::Key::Return
                && shortcut.modifiers == clean_mods
            {
                return Some(*action);
            }
        }
        None
    }

    /// Tooltip text such as "Copy to Clipboard (Shift+Ctrl+C)".
    pub fn tooltip(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(sc) => format!(
                "{} ({})",
                action.label(),
                gtk::accelerator_get_label(sc.key, sc.modifiers)
            ),
            None => action.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_tinyurl() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "https://tinyurl.com/api-create.php");
        assert_eq!(config.window_width, 360);
        assert_eq!(config.window_height, 225);
        assert_eq!(config.animation_interval, Duration::from_millis(20));
        assert_eq!(config.icon_name, "insert-link");
    }

    #[test]
    fn test_copy_shortcut() {
        let shortcuts = ShortcutConfig::default();
        let mods = gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::SHIFT_MASK;
        assert_eq!(shortcuts.get_action(gdk::Key::C, mods), Some(Action::Copy));
        assert_eq!(
            shortcuts.get_action(gdk::Key::C, gdk::ModifierType::SHIFT_MASK),
            None
        );
    }

    #[test]
    fn test_lock_modifiers_are_ignored() {
        let shortcuts = ShortcutConfig::default();
        let mods = gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::LOCK_MASK;
        assert_eq!(shortcuts.get_action(gdk::Key::q, mods), Some(Action::Quit));
    }

    #[test]
    fn test_keypad_enter_submits() {
        let shortcuts = ShortcutConfig::default();
        let ctrl = gdk::ModifierType::CONTROL_MASK;
        assert_eq!(
            shortcuts.get_action(gdk::Key::Return, ctrl),
            Some(Action::Submit)
        );
        assert_eq!(
            shortcuts.get_action(gdk::Key::KP_Enter, ctrl),
            Some(Action::Submit)
        );
        assert_eq!(
            shortcuts.get_action(gdk::Key::Return, gdk::ModifierType::empty()),
            None
        );
    }
}
