use thiserror::Error;

/// Errors raised by the combinatorial helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("invalid argument: binomial({n}, {k}) needs non-negative integers")]
    InvalidArgument { n: i64, k: i64 },

    #[error("overflow: binomial({n}, {k}) does not fit in 128 bits")]
    Overflow { n: i64, k: i64 },
}

/// Number of `k`-combinations of `n` items, computed exactly.
///
/// `k > n` yields `0`; `k == 0` and `k == n` yield `1`. Negative inputs are a
/// contract violation and return [`MathError::InvalidArgument`].
pub fn binomial(n: i64, k: i64) -> Result<u128, MathError> {
    if n < 0 || k < 0 {
        return Err(MathError::InvalidArgument { n, k });
    }
    if k > n {
        return Ok(0);
    }

    let k_small = k.min(n - k) as u128;
    let n_wide = n as u128;
    let mut acc: u128 = 1;
    for i in 0..k_small {
        // acc == C(n, i) here, so acc * (n - i) is divisible by (i + 1)
        acc = acc
            .checked_mul(n_wide - i)
            .ok_or(MathError::Overflow { n, k })?
            / (i + 1);
    }
    Ok(acc)
}

/// Natural log of `C(n, k)`. Returns `-inf` when `k > n`.
pub fn ln_binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }
    let n = n as f64;
    let k = k as f64;
    libm::lgamma(n + 1.0) - libm::lgamma(k + 1.0) - libm::lgamma(n - k + 1.0)
}

/// `C(a, b) / C(c, d)` as a float.
///
/// Exact integers are used while both coefficients fit in `u128`; otherwise the
/// ratio is taken in log space. A zero denominator yields `+inf` or `NaN` like
/// ordinary float division.
pub fn binomial_ratio(a: i64, b: i64, c: i64, d: i64) -> Result<f64, MathError> {
    match (binomial(a, b), binomial(c, d)) {
        (Ok(num), Ok(den)) => Ok(num as f64 / den as f64),
        (Err(e @ MathError::InvalidArgument { .. }), _)
        | (_, Err(e @ MathError::InvalidArgument { .. })) => Err(e),
        _ => {
            if b > a {
                return Ok(0.0);
            }
            let ln = ln_binomial(a as u64, b as u64) - ln_binomial(c as u64, d as u64);
            Ok(ln.exp())
        }
    }
}

/// Tolerance-based float comparison.
///
/// True when `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
#[inline]
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}
