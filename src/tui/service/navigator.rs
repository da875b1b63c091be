use crate::config::NavigatorKind;
use crate::route::script_url;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Receives the absolute URL of a script page the user picked.
pub trait Navigator {
    fn navigate(&mut self, url: &str) -> Result<()>;
}

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Hands the URL to the desktop's default opener.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        let (program, args) = OPENER;
        Command::new(program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to launch {}", program))?;
        log::info!("Opened {}", url);
        Ok(())
    }
}

/// Only records the URLs. Used when no desktop opener is wanted.
#[derive(Debug, Default)]
pub struct PrintNavigator {
    pub visited: Vec<String>,
}

impl Navigator for PrintNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        log::info!("Navigate to {}", url);
        self.visited.push(url.to_string());
        Ok(())
    }
}

pub fn navigator_for(kind: NavigatorKind) -> Box<dyn Navigator> {
    match kind {
        NavigatorKind::Browser => Box::new(BrowserNavigator),
        NavigatorKind::Print => Box::new(PrintNavigator::default()),
    }
}

/// Navigates to the detail page of `slug` and reports the outcome in `status`.
pub fn open_script(
    navigator: &mut dyn Navigator,
    site_url: &str,
    slug: &str,
    status: &mut Option<String>,
) {
    let url = script_url(site_url, slug);
    *status = Some(match navigator.navigate(&url) {
        Ok(()) => format!("Opened {}", url),
        Err(e) => {
            log::error!("Navigation to {} failed: {:#}", url, e);
            format!("Could not open {}: {}", url, e)
        }
    });
}
