//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `50` → `$50.00`
pub fn money(currency: &str, amount: f64) -> String {
    format!("{currency}{amount:.2}")
}

/// `4.8` → `★ 4.8`
pub fn rating(value: f64) -> String {
    format!("★ {value:.1}")
}
