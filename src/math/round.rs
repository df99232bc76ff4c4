/// 四捨六入五成雙（banker's rounding）至 `digits` 位小數。
pub fn round(x: f64, digits: u32) -> f64 {
    let pow1: f64;
    let pow2: f64;

    if digits > 22 {
        // pow1 與 pow2 各自不會溢位，但兩者乘積可能溢位
        pow1 = 10.0_f64.powi((digits - 22) as i32);
        pow2 = 1e22;
    } else {
        pow1 = 10.0_f64.powi(digits as i32);
        pow2 = 1.0;
    }

    let y = (x * pow1) * pow2;

    let mut z = y.round();

    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }

    (z / pow2) / pow1
}

/// 比例轉為整數百分比標籤，例如 0.49 → "49%"
pub fn percent_label(ratio: f64) -> String {
    // 加 0.0 把 -0.0 正規化為 0.0
    let pct = round(ratio * 100.0, 0) + 0.0;
    format!("{:.0}%", pct)
}
