/// 標準解析度階梯（影片高度，由小到大）
pub const STANDARD_RESOLUTIONS: [u32; 8] = [144, 240, 360, 480, 720, 1080, 1440, 2160];

/// 取出不超過來源高度的所有標準解析度，保持遞增順序
#[must_use]
pub fn determine_resolutions(max_height: u32) -> Vec<u32> {
    STANDARD_RESOLUTIONS
        .iter()
        .copied()
        .filter(|&res| res <= max_height)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ladder_value_yields_prefix() {
        for (i, &height) in STANDARD_RESOLUTIONS.iter().enumerate() {
            assert_eq!(determine_resolutions(height), STANDARD_RESOLUTIONS[..=i]);
        }
    }

    #[test]
    fn test_between_ladder_values() {
        assert_eq!(determine_resolutions(1079), vec![144, 240, 360, 480, 720]);
        assert_eq!(determine_resolutions(4320), STANDARD_RESOLUTIONS.to_vec());
    }

    #[test]
    fn test_too_small_source_is_empty() {
        assert!(determine_resolutions(100).is_empty());
        assert!(determine_resolutions(0).is_empty());
    }

    #[test]
    fn test_strictly_increasing() {
        let ladder = determine_resolutions(2160);
        assert!(ladder.windows(2).all(|w| w[0] < w[1]));
    }
}
