//! Metrics collection.
//!
//! # Metrics
//! - `logchimp_config_resolutions_total` (counter): resolutions by `outcome`
//! - `logchimp_config_reloads_total` (counter): explicit reloads
//! - `logchimp_cache_active` (gauge): 1=cache client created, 0=disabled

pub fn record_config_resolution(outcome: &'static str) {
    metrics::counter!("logchimp_config_resolutions_total", "outcome" => outcome).increment(1);
}

pub fn record_config_reload() {
    metrics::counter!("logchimp_config_reloads_total").increment(1);
}

pub fn record_cache_active(active: bool) {
    metrics::gauge!("logchimp_cache_active").set(if active { 1.0 } else { 0.0 });
}
