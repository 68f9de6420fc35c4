pub mod sharpen;
pub mod threshold;

/// The grid transforms the filter engine offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    FixedThreshold,
    Otsu,
    Sharpen,
}

impl FilterKind {
    pub const ALL: &[FilterKind] = &[
        FilterKind::FixedThreshold,
        FilterKind::Otsu,
        FilterKind::Sharpen,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::FixedThreshold => "threshold",
            FilterKind::Otsu => "otsu",
            FilterKind::Sharpen => "sharpen",
        }
    }
}

impl std::str::FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "threshold" | "fixed" => Ok(FilterKind::FixedThreshold),
            "otsu" => Ok(FilterKind::Otsu),
            "sharpen" => Ok(FilterKind::Sharpen),
            _ => Err(format!("unknown filter: {}", s)),
        }
    }
}
