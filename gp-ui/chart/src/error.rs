use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error(
        "ProportionChart: Negative values are not supported. All segment values must be >= 0."
    )]
    NegativeValues,
    #[error(
        "ProportionChart: Missing color configuration for segment keys: {}. Ensure all segment keys have corresponding entries in the colors prop.",
        .keys.join(", ")
    )]
    MissingColors { keys: Vec<String> },
}
