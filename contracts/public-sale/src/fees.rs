/// Split a gross amount between the treasury and the commission recipient.
///
/// The commission is floored, so any rounding remainder stays with the
/// treasury and the two shares always sum exactly to `gross`.
pub fn split(gross: i128, rate_bps: u32) -> (i128, i128) {
    let commission_share = gross * i128::from(rate_bps) / 10_000;
    let treasury_share = gross - commission_share;
    (treasury_share, commission_share)
}
