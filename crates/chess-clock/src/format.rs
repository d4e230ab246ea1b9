//! Compact duration text such as `1hr2min5sec`.

/// Formats a number of seconds as hours, minutes and seconds, omitting
/// zero components. The seconds component is rounded up.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 {
        return format!("-{}", format_duration(-seconds));
    }

    let hours = (seconds / 3600.0).floor();
    let rest = seconds - hours * 3600.0;
    let minutes = (rest / 60.0).floor();
    let secs = rest - minutes * 60.0;

    let mut desc = String::new();
    if hours > 0.0 {
        desc.push_str(&format!("{}hr", hours as u64));
    }
    if minutes > 0.0 {
        desc.push_str(&format!("{}min", minutes as u64));
    }
    if secs > 0.0 {
        desc.push_str(&format!("{}sec", secs.ceil() as u64));
    }
    if desc.is_empty() {
        desc.push_str("0sec");
    }
    desc
}
