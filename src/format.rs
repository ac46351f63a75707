//! Formatting utilities.

/// The unit suffixes for increasing powers of 1024.
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a file size in bytes to be human-readable.
///
/// The unit is the largest power of 1024 the value fits, capped at
/// terabytes. The number is rounded to two decimal places, with trailing
/// zeros and a trailing decimal point stripped.
#[allow(
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let exponent = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1) as usize;
    let scaled = format!("{:.2}", (bytes as f64) / 1024f64.powi(exponent as i32));
    let trimmed = scaled.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", trimmed, UNITS[exponent])
}

/// Formatting tests.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1_023), "1023 Bytes");
        assert_eq!(format_file_size(1_024), "1 KB");
        assert_eq!(format_file_size(1_536), "1.5 KB");
        assert_eq!(format_file_size(1_126), "1.1 KB");
        assert_eq!(format_file_size(24_013), "23.45 KB");
        assert_eq!(format_file_size(1_048_575), "1024 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(1_289_749), "1.23 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
        assert_eq!(format_file_size(1_320_702_444), "1.23 GB");
        assert_eq!(format_file_size(1_099_511_627_776), "1 TB");
        assert_eq!(format_file_size(1_649_267_441_664), "1.5 TB");
    }

    #[test]
    fn test_units_cap_at_terabytes() {
        assert_eq!(format_file_size(1_125_899_906_842_624), "1024 TB");
        assert_eq!(format_file_size(u64::MAX), "16777216 TB");
    }

    #[test]
    fn test_round_trip_tolerance() {
        for bytes in [1u64, 999, 1_024, 5_309, 481_226, 77_316_476, 9_234_567_890] {
            let formatted = format_file_size(bytes);
            let (number, unit) = formatted.split_once(' ').unwrap();
            let exponent = UNITS.iter().position(|&known| known == unit).unwrap();
            let approximate = number.parse::<f64>().unwrap() * 1024f64.powi(exponent as i32);
            let tolerance = 0.005 * 1024f64.powi(exponent as i32) + 0.5;
            assert!((approximate - bytes as f64).abs() <= tolerance);
        }
    }
}
