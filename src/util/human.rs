const GIB: f64 = 1_073_741_824.0;

/// Convert a raw byte count to GiB, rounded (half away from zero) to two decimals.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    (bytes as f64 / GIB * 100.0).round() / 100.0
}

/// Format a scaled value for display: "1.0", "1.5", "1.15"
pub fn fmt_gb(gb: f64) -> String {
    if gb.fract() == 0.0 {
        format!("{:.1}", gb)
    } else {
        format!("{}", gb)
    }
}
