use divergence_core::models::ConfidenceCheck;

use crate::stats::{mean, safe_div, standard_error, std_dev, z_value_for_confidence};

/// Two-sample test: is the twin mean outside `baseline_mean ± z * SE`?
///
/// SE is the standard error of the difference of means, built from both
/// population standard deviations. A zero SE collapses the interval to the
/// baseline mean, so any difference in means exceeds it.
pub fn check_confidence_interval(twin: &[f64], baseline: &[f64], confidence: f64) -> ConfidenceCheck {
    let twin_mean = mean(twin);
    let baseline_mean = mean(baseline);
    let twin_sd = std_dev(twin, Some(twin_mean));
    let baseline_sd = std_dev(baseline, Some(baseline_mean));

    let se = standard_error(twin_sd, twin.len(), baseline_sd, baseline.len());
    let margin = z_value_for_confidence(confidence) * se;
    let lower_bound = baseline_mean - margin;
    let upper_bound = baseline_mean + margin;

    ConfidenceCheck {
        exceeded: twin_mean < lower_bound || twin_mean > upper_bound,
        twin_mean,
        baseline_mean,
        lower_bound,
        upper_bound,
        z_score: safe_div(twin_mean - baseline_mean, se),
        standard_error: se,
    }
}
