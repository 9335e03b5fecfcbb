// Operators prefix station names with a brand or district, e.g.
// "dublinbikes - Smithfield" or "Depot-North-Gate". The delimiter candidates
// are tried in priority order; dash-space must win over bare dash or the
// split would leave a trailing space on every segment.
const DELIMITERS: [&str; 3] = ["- ", "-", " : "];

/// Strips the operator prefix from a raw station name.
///
/// The name is split on the first delimiter candidate it contains and the
/// leading segment is discarded. A single remaining segment is returned
/// as-is; multiple remaining segments are rejoined with a space before each.
/// Names with no delimiter, or whose remainder is empty, come back
/// unchanged.
pub fn station_display_name(name: &str) -> String {
    let delimiter = match DELIMITERS.iter().find(|d| name.contains(*d)) {
        Some(d) => d,
        None => return name.to_string(),
    };

    let mut segments = name.split(delimiter);
    segments.next();
    let remainder = segments.collect::<Vec<&str>>();

    let formatted = if remainder.len() > 1 {
        remainder
            .iter()
            .fold(String::new(), |joined, segment| joined + " " + segment)
    } else {
        match remainder.first() {
            Some(segment) => segment.to_string(),
            None => String::new(),
        }
    };

    if formatted.is_empty() || formatted == " " {
        return name.to_string();
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_space_delimiter_keeps_the_trailing_segment() {
        assert_eq!(station_display_name("Town Hall - Station 3"), "Station 3");
    }

    #[test]
    fn bare_dash_segments_are_rejoined_with_leading_spaces() {
        assert_eq!(station_display_name("Depot-North-Gate"), " North Gate");
    }

    #[test]
    fn dash_space_takes_priority_over_bare_dash() {
        // Split on "- ", not "-", so the hyphenated word survives intact.
        assert_eq!(
            station_display_name("dublinbikes - Custom-House Quay"),
            "Custom-House Quay"
        );
    }

    #[test]
    fn colon_delimiter_is_recognised() {
        assert_eq!(station_display_name("Métro : Hôtel de Ville"), "Hôtel de Ville");
    }

    #[test]
    fn name_without_delimiter_is_unchanged() {
        assert_eq!(station_display_name("Smithfield"), "Smithfield");
    }

    #[test]
    fn empty_remainder_falls_back_to_the_original_name() {
        assert_eq!(station_display_name("Smithfield-"), "Smithfield-");
    }

    #[test]
    fn result_does_not_depend_on_earlier_calls() {
        // A delimiter match must not leak into later calls.
        let _ = station_display_name("Town Hall - Station 3");
        assert_eq!(station_display_name("Smithfield"), "Smithfield");
    }
}
