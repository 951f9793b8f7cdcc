pub fn output_dir() -> String {
    "custom".to_string()
}
pub fn download_timeout_seconds() -> u64 {
    30
}
pub fn primary_color() -> String {
    "#0a0d10".to_string()
}
pub fn secondary_color() -> String {
    "#0a0d10".to_string()
}
pub fn red_color() -> String {
    "#d74949".to_string()
}
pub fn green_color() -> String {
    "#319236".to_string()
}
pub fn text_muted_color() -> String {
    "#888".to_string()
}
pub fn secondary_background_color() -> String {
    "#f1f1f1".to_string()
}
pub fn secondary_text_color() -> String {
    "#7a7a7a".to_string()
}
