//! Terminal bar chart for ranked candidates.
//!
//! Renders `(name, score)` pairs as horizontal bars, one row per
//! candidate in rank order.

const BAR_WIDTH: usize = 40;

/// Render ranked `(name, score)` pairs. Scores are expected in
/// [0, 100]; anything outside is clamped for display.
pub fn render(entries: &[(&str, f64)], top: Option<usize>) -> String {
    let shown = match top {
        Some(n) => &entries[..n.min(entries.len())],
        None => entries,
    };

    let name_width = shown
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (rank, (name, score)) in shown.iter().enumerate() {
        let clamped = score.clamp(0.0, 100.0);
        let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar: String = "#".repeat(filled) + &".".repeat(BAR_WIDTH - filled);
        out.push_str(&format!(
            "{:>3}. {:<name_width$}  [{bar}] {clamped:5.1}\n",
            rank,
            name,
            name_width = name_width,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic() {
        let out = render(&[("Veggie Stew", 82.5), ("Beef Stew", 41.0)], None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  0. Veggie Stew"));
        assert!(lines[0].contains("82.5"));
        assert!(lines[1].contains("41.0"));
    }

    #[test]
    fn test_render_top_limit() {
        let entries = [("A", 90.0), ("B", 50.0), ("C", 10.0)];
        let out = render(&entries, Some(2));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_bar_proportions() {
        let full = render(&[("X", 100.0)], None);
        assert!(full.contains(&"#".repeat(BAR_WIDTH)));
        let empty = render(&[("X", 0.0)], None);
        assert!(empty.contains(&".".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], None), "");
    }
}
