use std::collections::HashMap;

use iced::Color;

use super::error::ChartError;

/// Display color and label for one segment key.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorConfig {
    pub color: Color,
    pub label: String,
}

impl ColorConfig {
    pub fn new(color: Color, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}

/// Color configuration keyed by segment key.
pub type ChartColors = HashMap<String, ColorConfig>;

/// One raw input segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionSegment {
    pub key: String,
    pub value: f64,
}

impl ProportionSegment {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Validated segment with its color and share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSegment {
    pub key: String,
    pub label: String,
    pub color: Color,
    pub value: f64,
    /// Share of the total in `0.0..=100.0`.
    pub percentage: f64,
}

impl ResolvedSegment {
    /// Percentage rounded to a whole number, e.g. `"33%"`.
    pub fn percent_label(&self) -> String {
        format!("{}%", self.percentage.round())
    }
}

/// Normalized chart data ready to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProportionData {
    segments: Vec<ResolvedSegment>,
    total: f64,
}

impl ProportionData {
    pub fn segments(&self) -> &[ResolvedSegment] {
        &self.segments
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// True for empty input or when every value is zero.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Screen reader style description of the chart.
    pub fn summary(&self, format_value: impl Fn(f64) -> String) -> String {
        if self.is_empty() {
            return String::from("Empty chart with no data");
        }

        format!(
            "Proportion chart showing {} categories totaling {}",
            self.segments.len(),
            format_value(self.total)
        )
    }
}

/// Check and normalize raw segments.
///
/// Negative values are rejected before anything else. Zero values are
/// dropped, then every remaining key must have a color; all missing keys
/// are reported together in input order.
pub fn validate(
    data: &[ProportionSegment],
    colors: &ChartColors,
) -> Result<ProportionData, ChartError> {
    if data.iter().any(|segment| segment.value < 0.0) {
        return Err(ChartError::NegativeValues);
    }

    let visible: Vec<&ProportionSegment> =
        data.iter().filter(|segment| segment.value > 0.0).collect();

    let missing: Vec<String> = visible
        .iter()
        .filter(|segment| !colors.contains_key(&segment.key))
        .map(|segment| segment.key.clone())
        .collect();
    if !missing.is_empty() {
        return Err(ChartError::MissingColors { keys: missing });
    }

    let total: f64 = visible.iter().map(|segment| segment.value).sum();
    let segments = visible
        .into_iter()
        .filter_map(|segment| {
            colors.get(&segment.key).map(|config| ResolvedSegment {
                key: segment.key.clone(),
                label: config.label.clone(),
                color: config.color,
                value: segment.value,
                percentage: segment.value / total * 100.0,
            })
        })
        .collect::<Vec<_>>();

    log::debug!(
        "proportion chart: {} of {} segments visible, total={total}",
        segments.len(),
        data.len()
    );

    Ok(ProportionData { segments, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(keys: &[(&str, &str)]) -> ChartColors {
        keys.iter()
            .map(|(key, label)| {
                (key.to_string(), ColorConfig::new(Color::BLACK, *label))
            })
            .collect()
    }

    fn segments(values: &[(&str, f64)]) -> Vec<ProportionSegment> {
        values
            .iter()
            .map(|(key, value)| ProportionSegment::new(*key, *value))
            .collect()
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = validate(
            &segments(&[("a", 60.0), ("b", -5.0)]),
            &colors(&[("a", "A"), ("b", "B")]),
        )
        .expect_err("negative value must fail");

        assert_eq!(err, ChartError::NegativeValues);
        assert!(
            err.to_string()
                .contains("Negative values are not supported")
        );
    }

    #[test]
    fn negative_check_runs_before_color_check() {
        let err = validate(&segments(&[("unknown", -1.0)]), &colors(&[]))
            .expect_err("negative value must fail");

        assert_eq!(err, ChartError::NegativeValues);
    }

    #[test]
    fn missing_colors_list_every_key_in_input_order() {
        let err = validate(
            &segments(&[("missing2", 1.0), ("a", 1.0), ("missing1", 1.0)]),
            &colors(&[("a", "A")]),
        )
        .expect_err("missing colors must fail");

        assert_eq!(
            err.to_string(),
            "ProportionChart: Missing color configuration for segment keys: \
             missing2, missing1. Ensure all segment keys have corresponding \
             entries in the colors prop."
        );
    }

    #[test]
    fn zero_segments_are_dropped_before_color_check() {
        let data = validate(
            &segments(&[("a", 60.0), ("b", 0.0), ("c", 40.0)]),
            &colors(&[("a", "A"), ("c", "C")]),
        )
        .expect("valid data");

        let keys: Vec<&str> =
            data.segments().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["a", "c"]);
        assert_eq!(data.total(), 100.0);
        assert_eq!(data.segments()[0].percentage, 60.0);
        assert_eq!(data.segments()[0].label, "A");
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let data = validate(
            &segments(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]),
            &colors(&[("a", "A"), ("b", "B"), ("c", "C")]),
        )
        .expect("valid data");

        let sum: f64 = data.segments().iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(data.segments()[0].percent_label(), "33%");
    }

    #[test]
    fn all_zero_or_empty_input_is_empty() {
        let zero =
            validate(&segments(&[("a", 0.0)]), &colors(&[])).expect("valid");
        let empty = validate(&[], &colors(&[])).expect("valid");

        assert!(zero.is_empty());
        assert!(empty.is_empty());
        assert_eq!(empty.total(), 0.0);
    }

    #[test]
    fn summary_counts_categories_and_formats_total() {
        let data = validate(
            &segments(&[("a", 60.0), ("b", 30.0), ("c", 10.0)]),
            &colors(&[("a", "A"), ("b", "B"), ("c", "C")]),
        )
        .expect("valid data");

        assert_eq!(
            data.summary(|value| format!("{value} items")),
            "Proportion chart showing 3 categories totaling 100 items"
        );
        assert_eq!(
            ProportionData::default().summary(|value| value.to_string()),
            "Empty chart with no data"
        );
    }
}
