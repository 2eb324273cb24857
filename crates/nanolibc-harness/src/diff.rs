//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    for (i, (e, a)) in expected.lines().zip(actual.lines()).enumerate() {
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            out.push_str(&format!("-{e}\n"));
            out.push_str(&format!("+{a}\n"));
        }
    }
    for (i, e) in expected.lines().enumerate().skip(actual.lines().count()) {
        out.push_str(&format!("@@ line {} @@\n", i + 1));
        out.push_str(&format!("-{e}\n"));
    }
    for (i, a) in actual.lines().enumerate().skip(expected.lines().count()) {
        out.push_str(&format!("@@ line {} @@\n", i + 1));
        out.push_str(&format!("+{a}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_render_marker() {
        assert_eq!(render_diff("5", "5"), "[identical]");
    }

    #[test]
    fn differing_line_is_marked() {
        let diff = render_diff("5", "6");
        assert!(diff.contains("-5"));
        assert!(diff.contains("+6"));
    }

    #[test]
    fn extra_actual_lines_are_reported() {
        let diff = render_diff("a", "a\nb");
        assert!(diff.contains("+b"));
    }
}
