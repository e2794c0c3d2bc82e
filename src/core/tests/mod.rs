mod histogram;

/// Distance in representable steps between two finite `f64`s of either sign.
pub(crate) fn ulp_diff_f64(a: f64, b: f64) -> u64 {
    fn ordered(u: u64) -> i64 {
        if u & 0x8000_0000_0000_0000 != 0 {
            i64::MIN - (u as i64)
        } else {
            u as i64
        }
    }

    ordered(a.to_bits()).abs_diff(ordered(b.to_bits()))
}

/// Deterministic stand-in for a seeded generator: cycles through `values`.
pub(crate) fn cycle(values: &[f64]) -> impl FnMut() -> f64 + '_ {
    let mut i = 0;
    move || {
        let x = values[i % values.len()];
        i += 1;
        x
    }
}
