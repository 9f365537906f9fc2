//! Platform-specific functionality.

#[cfg(target_os = "windows")]
pub mod windows;

/// Media and subtitle paths as the script interpreter can read them.
///
/// The DirectShow stack mangles characters outside ASCII in script
/// string literals, so on Windows such paths are swapped for their 8.3
/// short form. Other platforms pass paths through untouched.
#[cfg(target_os = "windows")]
pub fn script_safe_path(path: &str) -> String {
    windows::short_path_if_wide(path)
}

#[cfg(not(target_os = "windows"))]
pub fn script_safe_path(path: &str) -> String {
    path.to_string()
}
