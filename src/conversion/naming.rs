use crate::platform::Platform;

const MAX_STEM_LEN: usize = 30;

/// The download file name for a converted workflow: `<name>_<target>.json`.
///
/// The name is lowercased, stripped of everything outside `[a-z0-9_]`, cut to
/// 30 characters, and replaced by `wf` when nothing is left.
pub fn output_file_name(workflow_name: &str, target: Platform) -> String {
    let stem: String = workflow_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .take(MAX_STEM_LEN)
        .collect();
    let stem = if stem.is_empty() { "wf" } else { stem.as_str() };
    format!("{}_{}.json", stem, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_and_lowercases() {
        assert_eq!(
            output_file_name("My Lead Flow (v2)!", Platform::Make),
            "myleadflowv2_make.json"
        );
        assert_eq!(output_file_name("sync_CRM", Platform::N8n), "sync_crm_n8n.json");
    }

    #[test]
    fn empty_names_fall_back() {
        assert_eq!(output_file_name("", Platform::Zapier), "wf_zapier.json");
        assert_eq!(output_file_name("¿¡!", Platform::Zapier), "wf_zapier.json");
    }

    #[test]
    fn long_names_are_truncated() {
        let name = "a".repeat(50);
        assert_eq!(output_file_name(&name, Platform::N8n), format!("{}_n8n.json", "a".repeat(30)));
    }
}
