#[cfg(any(target_os = "linux", target_os = "macos"))]
use std::process::Command;

#[cfg(target_os = "linux")]
const GNOME_INTERFACE: &str = "org.gnome.desktop.interface";

/// Best-effort check of the desktop's dark mode preference.
/// Falls back to light when nothing can be detected.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "windows")]
    {
        if let Some(dark) = windows_apps_use_dark() {
            return dark;
        }
    }

    #[cfg(target_os = "linux")]
    {
        let gtk_theme = command_stdout("gsettings", &["get", GNOME_INTERFACE, "gtk-theme"]);
        if gtk_theme.is_some_and(|theme| theme.to_lowercase().contains("dark")) {
            return true;
        }
        let scheme = command_stdout("gsettings", &["get", GNOME_INTERFACE, "color-scheme"]);
        if scheme.is_some_and(|scheme| scheme.contains("prefer-dark")) {
            return true;
        }
    }

    #[cfg(target_os = "macos")]
    {
        // Only set while dark mode is active; the command fails otherwise
        let style = command_stdout("defaults", &["read", "-g", "AppleInterfaceStyle"]);
        if style.is_some_and(|style| style.to_lowercase().contains("dark")) {
            return true;
        }
    }

    false
}

#[cfg(target_os = "windows")]
fn windows_apps_use_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let value: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        tracing::debug!(program, "dark mode query exited with {}", output.status);
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}
