/// Canonical comparison form of a skill: surrounding whitespace trimmed, lower-cased.
///
/// No stemming and no Unicode folding beyond what `to_lowercase` does.
/// Display code keeps the original string; only comparisons use this form.
pub fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}
