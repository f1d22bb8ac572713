//! Rupiah formatting

/// Format an amount as Indonesian Rupiah with no fraction digits
///
/// Thousands are separated with `.` and amounts are rounded half away from
/// zero: `1104941.5` becomes `"Rp 1.104.942"`.
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("Rp {}", amount);
    }

    let rounded = amount.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
