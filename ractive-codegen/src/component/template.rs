use std::path::PathBuf;

use ractive_gen_config::LoadMethod;
use ractive_gen_core::{FileRules, GeneratedFile};

use super::ComponentNames;
use crate::builder::CodeBuilder;

/// Standalone component template: `.html` for AMD, `.ract` for Browserify.
///
/// Script-tag projects inline their templates in the page instead.
pub struct ComponentTemplate<'a> {
    extension: &'static str,
    names: &'a ComponentNames,
}

impl<'a> ComponentTemplate<'a> {
    pub fn new(load_method: LoadMethod, names: &'a ComponentNames) -> Option<Self> {
        let extension = match load_method {
            LoadMethod::ScriptTags => return None,
            LoadMethod::Amd => "html",
            LoadMethod::Browserify => "ract",
        };
        Some(Self { extension, names })
    }
}

impl GeneratedFile for ComponentTemplate<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("app")
            .join("scripts")
            .join("components")
            .join(format!("{}.{}", self.names.file, self.extension))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeBuilder::javascript()
            .block_with_close(
                &format!(r#"<div class="{}">"#, self.names.file),
                "</div>",
                |b| b.line(&format!("<p>{} component</p>", self.names.class)),
            )
            .build()
    }
}
