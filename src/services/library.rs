//! Video library directory services.

use crate::constants::VIDEO_EXTENSIONS;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A video file in the library listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoEntry {
    /// The file name.
    pub name: String,
    /// The file size in bytes.
    pub size: u64,
}

/// Whether a file name has a recognized video extension.
pub fn is_video_file(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(stem, extension)| {
        !stem.is_empty()
            && VIDEO_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
    })
}

/// Whether an entry name matches the listing filter. An empty filter
/// matches everything.
pub fn matches_filter(name: &str, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || name.to_lowercase().contains(&filter.to_lowercase())
}

/// The default library folder, if the home directory is known.
pub fn default_library_folder() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join("Videos"))
}

/// Lists the video files directly inside the given folder, sorted by
/// name.
pub async fn scan_library(path: &Path) -> io::Result<Vec<VideoEntry>> {
    let mut videos = vec![];

    let mut entries = fs::read_dir(path).await?;

    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;

        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();

        if !is_video_file(&name) {
            continue;
        }

        let size = entry.metadata().await?.len();
        videos.push(VideoEntry { name, size });
    }

    videos.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(videos)
}

/// Library service tests.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file("holiday.mp4"));
        assert!(is_video_file("holiday.MKV"));
        assert!(is_video_file("season 1 episode 2.avi"));
        assert!(is_video_file("archive.tar.m4v"));

        assert!(!is_video_file("holiday.srt"));
        assert!(!is_video_file("holiday.mp3"));
        assert!(!is_video_file("holiday"));
        assert!(!is_video_file(".mp4"));
        assert!(!is_video_file("mp4"));
    }

    #[test]
    fn test_matches_filter() {
        assert!(matches_filter("holiday.mp4", ""));
        assert!(matches_filter("holiday.mp4", "   "));
        assert!(matches_filter("holiday.mp4", "holi"));
        assert!(matches_filter("holiday.mp4", "HOLIDAY"));
        assert!(matches_filter("Holiday.mp4", " day "));

        assert!(!matches_filter("holiday.mp4", "winter"));
    }

    #[test]
    fn test_default_library_folder_is_under_home() {
        if let Some(folder) = default_library_folder() {
            assert!(folder.ends_with("Videos"));
        }
    }
}
