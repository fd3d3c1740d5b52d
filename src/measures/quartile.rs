use crate::core::Estimate;
use crate::utils::math::{mean, median_of_sorted, sorted_copy};

/// Lower and upper quartile of a sorted sample, taken as the medians of its
/// two halves.
///
/// For odd lengths the middle value belongs to both halves; for even lengths
/// to neither. The asymmetry is intentional and keeps results comparable with
/// published tables.
pub fn quartile_bounds(sorted: &[f64]) -> (f64, f64) {
    let n = sorted.len();
    let half = n / 2;
    let lower = if n % 2 == 0 {
        &sorted[..half]
    } else {
        &sorted[..half + 1]
    };
    let upper = &sorted[half..];
    (median_of_sorted(lower), median_of_sorted(upper))
}

/// Larger distance of the two quartiles to the mean.
pub fn iqr(sample: &[f64]) -> Estimate {
    let m = mean(sample);
    let (lower, upper) = quartile_bounds(&sorted_copy(sample));
    Estimate::new(m, (lower - m).abs().max((upper - m).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_length_halves_are_disjoint() {
        assert_eq!(quartile_bounds(&[1.0, 2.0, 3.0, 4.0]), (1.5, 3.5));
        assert_eq!(
            quartile_bounds(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            (2.0, 5.0)
        );
    }

    #[test]
    fn odd_length_shares_the_middle() {
        assert_eq!(quartile_bounds(&[1.0, 2.0, 3.0, 4.0, 100.0]), (2.0, 4.0));
    }

    #[test]
    fn iqr_uses_the_farther_quartile() {
        let e = iqr(&[100.0, 3.0, 1.0, 4.0, 2.0]);
        assert_eq!(e.mean, 22.0);
        assert_eq!(e.uncertainty, 20.0);

        let e = iqr(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(e.uncertainty, 1.0);
    }

    #[test]
    fn iqr_is_order_independent() {
        let a = [5.0, -2.0, 8.0, 1.0, 0.5, 7.0, 3.0];
        let mut b = a;
        b.reverse();
        assert_eq!(iqr(&a), iqr(&b));
    }
}
