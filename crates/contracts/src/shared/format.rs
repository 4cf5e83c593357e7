//! Display helpers for uploaded files and downloads.

/// Human readable size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2.25 MB`.
///
/// Two decimals at most, trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIconKind {
    Image,
    Video,
    Audio,
    Pdf,
    Word,
    Excel,
    PowerPoint,
    Generic,
}

impl FileIconKind {
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_ascii_lowercase();
        if mime.starts_with("image/") {
            FileIconKind::Image
        } else if mime.starts_with("video/") {
            FileIconKind::Video
        } else if mime.starts_with("audio/") {
            FileIconKind::Audio
        } else if mime == "application/pdf" {
            FileIconKind::Pdf
        } else if mime.contains("word") {
            FileIconKind::Word
        } else if mime.contains("excel") || mime.contains("sheet") {
            FileIconKind::Excel
        } else if mime.contains("powerpoint") || mime.contains("presentation") {
            FileIconKind::PowerPoint
        } else {
            FileIconKind::Generic
        }
    }

    /// Icon name understood by the frontend icon set.
    pub fn icon_name(&self) -> &'static str {
        match self {
            FileIconKind::Image => "file-image",
            FileIconKind::Video => "file-video",
            FileIconKind::Audio => "file-audio",
            FileIconKind::Pdf => "file-pdf",
            FileIconKind::Word => "file-word",
            FileIconKind::Excel => "file-excel",
            FileIconKind::PowerPoint => "file-powerpoint",
            FileIconKind::Generic => "file",
        }
    }
}

pub const DEFAULT_DOWNLOAD_NAME: &str = "document.pdf";

/// File name from a `Content-Disposition` header, `document.pdf` when absent.
pub fn content_disposition_filename(header: Option<&str>) -> String {
    header
        .and_then(|value| {
            value.split(';').map(str::trim).find_map(|part| {
                let rest = part.strip_prefix("filename=")?;
                let name = rest.trim_matches('"');
                (!name.is_empty()).then(|| name.to_string())
            })
        })
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_string())
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
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_file_icons() {
        assert_eq!(FileIconKind::from_mime("image/png"), FileIconKind::Image);
        assert_eq!(FileIconKind::from_mime("application/pdf"), FileIconKind::Pdf);
        assert_eq!(
            FileIconKind::from_mime("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            FileIconKind::Excel
        );
        assert_eq!(FileIconKind::from_mime("application/msword"), FileIconKind::Word);
        assert_eq!(FileIconKind::from_mime("text/plain").icon_name(), "file");
    }

    #[test]
    fn test_content_disposition() {
        assert_eq!(
            content_disposition_filename(Some(r#"attachment; filename="report 1.xlsx""#)),
            "report 1.xlsx"
        );
        assert_eq!(content_disposition_filename(Some("attachment; filename=a.txt")), "a.txt");
        assert_eq!(content_disposition_filename(Some("inline")), DEFAULT_DOWNLOAD_NAME);
        assert_eq!(content_disposition_filename(None), DEFAULT_DOWNLOAD_NAME);
    }
}
