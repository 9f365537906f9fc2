//! Frame-rate reconciliation.

/// The frame rate a script declares, kept as strings end to end.
///
/// Probes report rates as text and the script syntax wants text, so no
/// numeric parsing happens anywhere; malformed values pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRate {
    /// Numerator for the assume-rate directive
    pub numerator: String,

    /// Denominator for the assume-rate directive
    pub denominator: String,

    /// Decimal form declared to the source filter
    pub display: String,
}

impl FrameRate {
    /// Fallback numerator when no rate was probed.
    pub const DEFAULT_NUMERATOR: &'static str = "24000";

    /// NTSC-film denominator, used both as the fallback default and
    /// whenever the rational and decimal forms disagree.
    pub const NTSC_DENOMINATOR: &'static str = "1001";

    /// Fallback decimal rate when no rate was probed.
    pub const DEFAULT_DISPLAY: &'static str = "23.976";

    /// Reconcile the two frame-rate strings a media probe may report.
    ///
    /// When the rational and decimal forms are textually equal, the probe
    /// had no real ratio and the value is used as-is over a denominator of
    /// 1. When they differ, the numerator is the rational form's segment
    /// before `/` and the denominator is forced to 1001. If either form is
    /// missing, the NTSC film rate 24000/1001 (23.976) is assumed.
    pub fn reconcile(ratio: Option<&str>, rate: Option<&str>) -> Self {
        match (ratio, rate) {
            (Some(ratio), Some(rate)) => {
                if ratio == rate {
                    Self {
                        numerator: ratio.to_string(),
                        denominator: "1".to_string(),
                        display: rate.to_string(),
                    }
                } else {
                    let numerator = ratio.split_once('/').map_or(ratio, |(num, _)| num);
                    Self {
                        numerator: numerator.to_string(),
                        denominator: Self::NTSC_DENOMINATOR.to_string(),
                        display: rate.to_string(),
                    }
                }
            }
            _ => Self::default(),
        }
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self {
            numerator: Self::DEFAULT_NUMERATOR.to_string(),
            denominator: Self::NTSC_DENOMINATOR.to_string(),
            display: Self::DEFAULT_DISPLAY.to_string(),
        }
    }
}
