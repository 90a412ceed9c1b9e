/// 未列在表中的解析度使用的位元率
pub const DEFAULT_BITRATE: &str = "800k";

/// 每個解析度的目標／最大視訊位元率
#[must_use]
pub fn bitrate_for(resolution: u32) -> &'static str {
    match resolution {
        144 => "800k",
        240 => "400k",
        360 => "800k",
        480 => "1400k",
        720 => "2800k",
        1080 => "5000k",
        1440 => "8000k",
        2160 => "14000k",
        _ => DEFAULT_BITRATE,
    }
}

/// 將 ffmpeg 位元率字串轉成 bits/sec
///
/// `k` 後綴只接受整數，`M` 後綴可帶小數（四捨五入到整數）
#[must_use]
pub fn bitrate_to_bandwidth(bitrate: &str) -> Option<u64> {
    let bitrate = bitrate.trim();

    if let Some(kilo) = bitrate.strip_suffix('k') {
        return kilo.parse::<u64>().ok()?.checked_mul(1000);
    }

    if let Some(mega) = bitrate.strip_suffix('M') {
        let value = mega.parse::<f64>().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        return Some((value * 1_000_000.0).round() as u64);
    }

    bitrate.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitrate_table() {
        assert_eq!(bitrate_for(144), "800k");
        assert_eq!(bitrate_for(240), "400k");
        assert_eq!(bitrate_for(720), "2800k");
        assert_eq!(bitrate_for(2160), "14000k");
        assert_eq!(bitrate_for(999), DEFAULT_BITRATE);
    }

    #[test]
    fn test_bitrate_to_bandwidth() {
        assert_eq!(bitrate_to_bandwidth("800k"), Some(800_000));
        assert_eq!(bitrate_to_bandwidth("5000k"), Some(5_000_000));
        assert_eq!(bitrate_to_bandwidth("1.5M"), Some(1_500_000));
        assert_eq!(bitrate_to_bandwidth("2.3M"), Some(2_300_000));
        assert_eq!(bitrate_to_bandwidth("1000"), Some(1000));
    }

    #[test]
    fn test_bitrate_to_bandwidth_rejects_garbage() {
        assert_eq!(bitrate_to_bandwidth("fast"), None);
        assert_eq!(bitrate_to_bandwidth("1.5k"), None);
        assert_eq!(bitrate_to_bandwidth("k"), None);
        assert_eq!(bitrate_to_bandwidth("-1M"), None);
    }
}
