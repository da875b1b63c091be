use crate::model::{ResourceValue, Resources, NOT_AVAILABLE};

pub const MAX_DESCRIPTION_LENGTH: usize = 100;

/// Cuts `text` to `MAX_DESCRIPTION_LENGTH` characters and appends `...` when it was longer.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(MAX_DESCRIPTION_LENGTH) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

fn resource_figure(value: Option<&ResourceValue>, unit: &str) -> String {
    match value.filter(|v| !v.is_blank()) {
        Some(v) => format!("{}{}", v, unit),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_cpu(resources: Option<&Resources>) -> String {
    resource_figure(resources.and_then(|r| r.cpu.as_ref()), "vCPU")
}

pub fn format_ram(resources: Option<&Resources>) -> String {
    resource_figure(resources.and_then(|r| r.ram.as_ref()), "MB")
}

pub fn format_hdd(resources: Option<&Resources>) -> String {
    resource_figure(resources.and_then(|r| r.hdd.as_ref()), "GB")
}

pub fn format_resources(resources: Option<&Resources>) -> String {
    format!(
        "CPU: {} | RAM: {} | HDD: {}",
        format_cpu(resources),
        format_ram(resources),
        format_hdd(resources)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_description_unchanged() {
        let text = "Network-wide ad blocking.";
        assert_eq!(truncate_description(text), text);

        let exact = "a".repeat(MAX_DESCRIPTION_LENGTH);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn test_long_description_truncated() {
        let text = "b".repeat(MAX_DESCRIPTION_LENGTH + 1);
        let result = truncate_description(&text);
        assert_eq!(result, format!("{}...", "b".repeat(MAX_DESCRIPTION_LENGTH)));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let text = "é".repeat(150);
        let result = truncate_description(&text);
        assert_eq!(result.chars().count(), MAX_DESCRIPTION_LENGTH + 3);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_format_resources() {
        let resources = Resources {
            cpu: Some(ResourceValue::Number(2.into())),
            ram: Some(ResourceValue::Text("2048".into())),
            hdd: None,
        };
        assert_eq!(
            format_resources(Some(&resources)),
            "CPU: 2vCPU | RAM: 2048MB | HDD: N/A"
        );
        assert_eq!(format_resources(None), "CPU: N/A | RAM: N/A | HDD: N/A");
    }
}
