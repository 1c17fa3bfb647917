const MOBILE_MARKERS: [&str; 10] = [
    "Android",
    "iPhone",
    "iPad",
    "iPod",
    "Mobile",
    "webOS",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
    "Silk",
];

/// Phones and tablets, judged from the user agent. iPadOS reports a desktop
/// Safari agent, so a Macintosh agent with multi-touch also counts.
pub fn is_mobile_device(user_agent: &str, max_touch_points: i32) -> bool {
    if MOBILE_MARKERS.iter().any(|marker| user_agent.contains(marker)) {
        return true;
    }
    user_agent.contains("Macintosh") && max_touch_points > 1
}
