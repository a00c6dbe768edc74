/// Integer ceil division for `u128`.
///
/// Returns `None` on division by zero or overflow.
pub fn ceil_div_u128(numerator: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }

    numerator
        .checked_add(denominator.checked_sub(1)?)
        .and_then(|adjusted| adjusted.checked_div(denominator))
}

/// `ceil(value * numerator / denominator)` in `u128`, narrowed back to `u64`
pub fn mul_div_ceil(value: u64, numerator: u64, denominator: u64) -> Option<u64> {
    let product = (value as u128).checked_mul(numerator as u128)?;
    let quotient = ceil_div_u128(product, denominator as u128)?;
    u64::try_from(quotient).ok()
}

/// Formats an u64 number as a decimal string where the last 9 digits are the fraction
pub fn u64_to_dec9(n: u64) -> String {
    let int_part = n / 1_000_000_000;
    let frac_part = n % 1_000_000_000;

    if frac_part == 0 {
        return int_part.to_string();
    }
    let mut frac = format!("{:09}", frac_part);
    while frac.ends_with('0') {
        frac.pop();
    }

    format!("{}.{}", int_part, frac)
}
