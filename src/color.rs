use std::collections::BTreeMap;

use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Color mapping: algorithm name → Color32
// ---------------------------------------------------------------------------

/// The fixed display colors for the known sorting algorithms.
const ALGORITHM_COLORS: [(&str, Color32); 6] = [
    ("stdQuickSort", Color32::from_rgb(0x00, 0x80, 0x00)),   // green
    ("stdMergeSort", Color32::from_rgb(0xa5, 0x2a, 0x2a)),   // brown
    ("strQuickSort", Color32::from_rgb(0xff, 0xa5, 0x00)),   // orange
    ("strMergeSort", Color32::from_rgb(0xff, 0x00, 0x00)),   // red
    ("radixSort", Color32::from_rgb(0x00, 0x00, 0xff)),      // blue
    ("radixQuickSort", Color32::from_rgb(0x80, 0x00, 0x80)), // purple
];

/// Read-only map from algorithm name to its display color, with a gray
/// fallback for names outside the fixed set.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<&'static str, Color32>,
    default_color: Color32,
}

impl Default for ColorMap {
    fn default() -> Self {
        ColorMap {
            mapping: ALGORITHM_COLORS.into_iter().collect(),
            default_color: Color32::GRAY,
        }
    }
}

impl ColorMap {
    /// Look up the color for an algorithm name.
    pub fn color_for(&self, algorithm: &str) -> Color32 {
        self.mapping
            .get(algorithm)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Whether the name has a dedicated color (false means gray fallback).
    pub fn is_known(&self, algorithm: &str) -> bool {
        self.mapping.contains_key(algorithm)
    }

    /// Return the legend entries (algorithm label → color) for the UI.
    pub fn legend_entries(&self) -> Vec<(&'static str, Color32)> {
        self.mapping.iter().map(|(a, c)| (*a, *c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_algorithms_get_their_mapped_color() {
        let cm = ColorMap::default();
        assert_eq!(cm.color_for("stdQuickSort"), Color32::from_rgb(0x00, 0x80, 0x00));
        assert_eq!(cm.color_for("radixSort"), Color32::from_rgb(0x00, 0x00, 0xff));
        assert_eq!(cm.color_for("radixQuickSort"), Color32::from_rgb(0x80, 0x00, 0x80));
    }

    #[test]
    fn unknown_algorithms_fall_back_to_gray() {
        let cm = ColorMap::default();
        assert_eq!(cm.color_for("bubbleSort"), Color32::GRAY);
        assert_eq!(cm.color_for(""), Color32::GRAY);
        assert!(!cm.is_known("bubbleSort"));
    }

    #[test]
    fn legend_covers_all_six_algorithms() {
        let cm = ColorMap::default();
        assert_eq!(cm.legend_entries().len(), 6);
    }
}
