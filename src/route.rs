/// Route of a script's detail page, relative to the site root.
pub fn script_route(slug: &str) -> String {
    format!("/scripts?id={}", slug)
}

pub fn script_url(site_url: &str, slug: &str) -> String {
    format!("{}{}", site_url.trim_end_matches('/'), script_route(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_route() {
        assert_eq!(script_route("pihole"), "/scripts?id=pihole");
    }

    #[test]
    fn test_script_url_joins_site() {
        assert_eq!(
            script_url("https://example.org/ProxmoxVE/", "jellyfin"),
            "https://example.org/ProxmoxVE/scripts?id=jellyfin"
        );
    }
}
