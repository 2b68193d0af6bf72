//! Display formatting and file-type checks

use studio_gateway::{extension, FontFormat};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mov", "avi"];
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Human-readable size in base-1024 units, at most two decimals.
///
/// `1536` becomes `1.5 KB`, `0` becomes `0 Bytes`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= 1024u64.pow(unit as u32 + 1) {
        unit += 1;
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// `m:ss` for a duration in seconds
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Lowercased extension of a file name
pub fn file_extension(filename: &str) -> Option<String> {
    extension(filename)
}

pub fn is_supported_video(filename: &str) -> bool {
    file_extension(filename).is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
}

pub fn is_supported_image(filename: &str) -> bool {
    file_extension(filename).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

pub fn is_supported_font(filename: &str) -> bool {
    file_extension(filename).is_some_and(|ext| FontFormat::from_extension(&ext).is_some())
}

/// Name for a numeric CSS weight; unknown weights are returned as-is
pub fn font_weight_name(weight: &str) -> &str {
    match weight {
        "100" => "Thin",
        "200" => "Extra Light",
        "300" => "Light",
        "400" => "Regular",
        "500" => "Medium",
        "600" => "Semi Bold",
        "700" => "Bold",
        "800" => "Extra Bold",
        "900" => "Black",
        other => other,
    }
}

/// Sample text suited to a family
pub fn font_preview_text(family: &str) -> &'static str {
    match family.to_lowercase().replace(' ', "").as_str() {
        "bolddisplay" => "BOLD HEADLINES",
        "italicscript" => "Elegant Script",
        "monospacecode" => "console.log(\"Hello World\");",
        "elegantserif" => "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        _ => "The quick brown fox jumps over the lazy dog",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_048_576), "1.95 MB");
        assert_eq!(format_file_size(15_728_640), "15 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_file_size(5 * 1024u64.pow(4)), "5120 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(65.9), "1:05");
        assert_eq!(format_duration(240.0), "4:00");
        assert_eq!(format_duration(f64::NAN), "0:00");
        assert_eq!(format_duration(-3.0), "0:00");
    }

    #[test]
    fn test_supported_types() {
        assert!(is_supported_video("clip.MOV"));
        assert!(!is_supported_video("clip.mkv"));
        assert!(is_supported_image("a.webp"));
        assert!(!is_supported_image("a.bmp"));
        assert!(is_supported_font("x.woff2"));
        assert!(!is_supported_font("x.eot"));
    }

    #[test]
    fn test_weight_names() {
        assert_eq!(font_weight_name("300"), "Light");
        assert_eq!(font_weight_name("700"), "Bold");
        assert_eq!(font_weight_name("450"), "450");
    }

    #[test]
    fn test_preview_text() {
        assert_eq!(font_preview_text("BoldDisplay"), "BOLD HEADLINES");
        assert_eq!(font_preview_text("Monospace Code"), "console.log(\"Hello World\");");
        assert_eq!(font_preview_text("Roboto"), "The quick brown fox jumps over the lazy dog");
    }
}
