//! URL templates for upstream image assets. `{id}` is replaced by the asset id.

/// Skill icons.
///
/// The asset bundle directory and the file inside it share the
/// `skill_icon_<id>` name, so the segment appears twice.
pub const SKILL_ICON_TEMPLATE: &str = "https://raw.githubusercontent.com/ArknightsAssets/ArknightsAssets/cn/assets/torappu/dynamicassets/arts/skills/skill_icon_{id}/skill_icon_{id}.png";

/// Expand a `{id}` template.
pub fn expand(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_icon_repeats_the_bundle_segment() {
        assert_eq!(
            expand(SKILL_ICON_TEMPLATE, "skchr_amiya_2"),
            "https://raw.githubusercontent.com/ArknightsAssets/ArknightsAssets/cn/assets/torappu/dynamicassets/arts/skills/skill_icon_skchr_amiya_2/skill_icon_skchr_amiya_2.png"
        );
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        assert_eq!(expand("https://example.org/a.png", "x"), "https://example.org/a.png");
    }
}
