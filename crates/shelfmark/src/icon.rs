use crate::prelude::{eprintln, println, *};
use shelfmark_core::icons::{Icon, IconError, IconRegistry, IconSource, NoSource};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, clap::Args, Clone)]
pub struct IconOptions {
    /// Icon name (e.g. "search", "list")
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// Extra CSS classes for the icon wrapper
    #[arg(long)]
    pub classes: Option<String>,

    /// Hide the icon from assistive technology
    #[arg(long)]
    pub aria_hidden: bool,

    /// Do not add a <title> element
    #[arg(long)]
    pub no_label: bool,

    /// Disambiguates the title id when an icon appears more than once
    #[arg(long)]
    pub label_context: Option<String>,

    /// Directory searched for icons that are not built in
    #[arg(long, env = "SHELFMARK_ICON_DIR")]
    pub assets: Option<PathBuf>,

    /// Print the wrapper attributes as JSON instead of the SVG
    #[arg(long)]
    pub options: bool,

    /// List the built-in icon names
    #[arg(long)]
    pub list: bool,
}

/// Reads `<root>/<asset path>` from disk
struct DirSource {
    root: PathBuf,
}

impl IconSource for DirSource {
    fn find(&self, path: &str) -> Option<String> {
        let file = self.root.join(path);
        log::debug!("Looking up icon asset {}", file.display());
        fs::read_to_string(file).ok()
    }
}

fn registry(options: &IconOptions) -> IconRegistry {
    match &options.assets {
        Some(root) => IconRegistry::with_builtins(Box::new(DirSource { root: root.clone() })),
        None => IconRegistry::with_builtins(Box::new(NoSource)),
    }
}

fn build_icon(name: &str, options: &IconOptions) -> Icon {
    let mut icon = Icon::new(name)
        .aria_hidden(options.aria_hidden)
        .label(!options.no_label);

    if let Some(classes) = &options.classes {
        icon = icon.classes(classes);
    }
    if let Some(context) = &options.label_context {
        icon = icon.label_context(context);
    }

    icon
}

pub fn run(options: IconOptions, global: crate::Global) -> Result<()> {
    let registry = registry(&options);

    if options.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let name = options
        .name
        .as_deref()
        .ok_or_else(|| eyre!("An icon name is required"))?;
    let icon = build_icon(name, &options);

    if global.verbose {
        eprintln!("Icon asset path: {}", icon.path());
    }

    if options.options {
        let json = serde_json::to_string_pretty(&icon.options())
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    let svg = registry.render(&icon).map_err(|e| match e {
        IconError::NotFound(path) => Error::IconNotFound(path),
    })?;
    println!("{}", svg);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(assets: Option<PathBuf>) -> IconOptions {
        IconOptions {
            name: None,
            classes: None,
            aria_hidden: false,
            no_label: false,
            label_context: None,
            assets,
            options: false,
            list: false,
        }
    }

    #[test]
    fn test_build_icon_applies_flags() {
        let opts = IconOptions {
            classes: Some("awesome".to_string()),
            aria_hidden: true,
            no_label: true,
            ..options(None)
        };
        let icon = build_icon("test", &opts);

        assert_eq!(
            icon.options().class,
            "blacklight-icons blacklight-icon-test awesome"
        );
        assert_eq!(icon.options().aria_hidden, Some(true));
        assert!(!icon.label);
    }

    #[test]
    fn test_registry_reads_assets_directory() {
        let temp_dir = TempDir::new().unwrap();
        let asset_dir = temp_dir.path().join("blacklight");
        fs::create_dir_all(&asset_dir).unwrap();
        fs::write(asset_dir.join("test.svg"), "<svg width=\"24\"></svg>").unwrap();

        let registry = registry(&options(Some(temp_dir.path().to_path_buf())));
        let svg = registry.render(&Icon::new("test")).unwrap();

        assert_eq!(
            svg,
            "<svg width=\"24\" role=\"img\"><title id=\"bl-icon-test\">Test</title></svg>"
        );
    }

    #[test]
    fn test_registry_without_assets_only_has_builtins() {
        let registry = registry(&options(None));
        assert!(registry.render(&Icon::new("search")).is_ok());
        assert!(registry.render(&Icon::new("test")).is_err());
    }
}
