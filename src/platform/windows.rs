//! Windows-specific functionality.

use windows::core::PCWSTR;
use windows::Win32::Storage::FileSystem::GetShortPathNameW;

/// Swap a path for its 8.3 short form when it contains characters
/// outside ASCII.
///
/// Returns the input unchanged when it is plain ASCII, or when Windows
/// cannot produce a short form (file missing, 8.3 names disabled on the
/// volume).
pub fn short_path_if_wide(path: &str) -> String {
    if path.is_ascii() {
        return path.to_string();
    }

    let wide: Vec<u16> = path.encode_utf16().chain(std::iter::once(0)).collect();

    unsafe {
        let required = GetShortPathNameW(PCWSTR(wide.as_ptr()), None);
        if required == 0 {
            return path.to_string();
        }

        let mut buffer = vec![0u16; required as usize];
        let written = GetShortPathNameW(PCWSTR(wide.as_ptr()), Some(&mut buffer));
        if written == 0 || written as usize > buffer.len() {
            return path.to_string();
        }

        String::from_utf16_lossy(&buffer[..written as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_path_is_untouched() {
        assert_eq!(
            short_path_if_wide("C:\\media\\movie.avi"),
            "C:\\media\\movie.avi"
        );
    }

    #[test]
    fn test_missing_wide_path_falls_back() {
        // No such file exists, so conversion fails and the input wins.
        let path = "C:\\d\u{e9}finitivement-absent\\cl\u{ef}p.mkv";
        assert_eq!(short_path_if_wide(path), path);
    }
}
