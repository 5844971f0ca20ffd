/// Round a money or percentage value to two decimals.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `+12.5` for gains, `-3` / `0` otherwise.
pub fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", value)
    } else {
        format!("{}", value)
    }
}
