//! CSS motion check: does an element (or one of its children) transition or
//! animate? Malformed values count as no motion.

use web_sys::{Element, Window};

/// Longest duration in a CSS time list such as `"0.3s, 150ms"`, in ms.
pub fn parse_duration_ms(value: &str) -> f64 {
    value
        .split(',')
        .map(|part| {
            let part = part.trim();
            let (number, scale) = if let Some(n) = part.strip_suffix("ms") {
                (n, 1.0)
            } else if let Some(n) = part.strip_suffix('s') {
                (n, 1000.0)
            } else {
                return 0.0;
            };
            number
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v * scale)
                .unwrap_or(0.0)
        })
        .fold(0.0, f64::max)
}

pub fn has_motion(transition_duration: &str, animation_duration: &str, transition_property: &str) -> bool {
    if parse_duration_ms(transition_duration) > 0.0 || parse_duration_ms(animation_duration) > 0.0 {
        return true;
    }
    let props = transition_property.to_ascii_lowercase();
    ["transform", "opacity", "all"].iter().any(|p| props.contains(p))
}

/// Computed-style check on `el`, then on its children depth-first.
pub fn element_animates(win: &Window, el: &Element) -> bool {
    if let Ok(Some(cs)) = win.get_computed_style(el) {
        let prop = |name: &str| cs.get_property_value(name).unwrap_or_default();
        if has_motion(
            &prop("transition-duration"),
            &prop("animation-duration"),
            &prop("transition-property"),
        ) {
            return true;
        }
    }
    let children = el.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .any(|child| element_animates(win, &child))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_max_of_list_in_ms() {
        assert_eq!(parse_duration_ms("0.3s, 150ms"), 300.0);
        assert_eq!(parse_duration_ms("0s"), 0.0);
        assert_eq!(parse_duration_ms(" 20ms "), 20.0);
    }

    #[test]
    fn malformed_is_zero() {
        assert_eq!(parse_duration_ms(""), 0.0);
        assert_eq!(parse_duration_ms("fast"), 0.0);
        assert_eq!(parse_duration_ms("xs, 1e999s"), 0.0);
        assert_eq!(parse_duration_ms("12"), 0.0);
    }

    #[test]
    fn transition_property_alone_counts() {
        assert!(has_motion("0s", "0s", "Transform"));
        assert!(has_motion("0s", "0s", "all"));
        assert!(!has_motion("0s", "0s", "color"));
        assert!(has_motion("0s", "1s", "none"));
    }
}
