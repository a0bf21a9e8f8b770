/// Split `major.minor.patch` leniently: positions missing after the split
/// default to 0, as does any position that is not an unsigned integer.
/// Anything past the third position is ignored.
pub(crate) fn version_components(version: &str) -> [u32; 3] {
    let mut parts = version.split('.');
    let mut next = || {
        parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .unwrap_or(0)
    };
    [next(), next(), next()]
}

/// The segment at `index`, treating an empty segment as absent.
pub(crate) fn segment<'a>(segments: &[&'a str], index: usize) -> Option<&'a str> {
    segments.get(index).copied().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_version() {
        assert_eq!(version_components("1.22.3"), [1, 22, 3]);
    }

    #[test]
    fn missing_positions_default_to_zero() {
        assert_eq!(version_components("4"), [4, 0, 0]);
        assert_eq!(version_components("4.1"), [4, 1, 0]);
        assert_eq!(version_components(""), [0, 0, 0]);
    }

    #[test]
    fn non_numeric_positions_default_to_zero() {
        assert_eq!(version_components("2.x.7"), [2, 0, 7]);
        assert_eq!(version_components("1.0.0-beta"), [1, 0, 0]);
        assert_eq!(version_components(" 1 . 2 .3"), [0, 0, 3]);
    }

    #[test]
    fn extra_positions_are_ignored() {
        assert_eq!(version_components("1.2.3.4"), [1, 2, 3]);
    }

    #[test]
    fn empty_segment_is_absent() {
        let segments = ["ios", "", "1.0.0"];
        assert_eq!(segment(&segments, 0), Some("ios"));
        assert_eq!(segment(&segments, 1), None);
        assert_eq!(segment(&segments, 5), None);
    }
}
