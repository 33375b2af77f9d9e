use std::path::PathBuf;

use ractive_gen_config::LoadMethod;
use ractive_gen_core::{FileRules, GeneratedFile};

use super::{ComponentNames, ComponentSpec};
use crate::builder::CodeBuilder;
use crate::files::js_string;

/// `app/scripts/components/<name>.js`
pub struct ComponentDefinition<'a> {
    load_method: LoadMethod,
    spec: &'a ComponentSpec,
    names: &'a ComponentNames,
}

impl<'a> ComponentDefinition<'a> {
    pub fn new(load_method: LoadMethod, spec: &'a ComponentSpec, names: &'a ComponentNames) -> Self {
        Self {
            load_method,
            spec,
            names,
        }
    }

    fn template_expr(&self) -> String {
        match self.load_method {
            LoadMethod::ScriptTags => js_string(&format!("#component/{}-template", self.names.file)),
            LoadMethod::Amd => "template".to_string(),
            LoadMethod::Browserify => {
                format!("require({})", js_string(&format!("./{}.ract", self.names.file)))
            }
        }
    }

    /// The `Ractive.extend` declaration and optional global registration.
    fn declaration(&self, b: CodeBuilder) -> CodeBuilder {
        let class = &self.names.class;
        b.block_with_close(&format!("var {} = Ractive.extend({{", class), "});", |b| {
            b.line(&format!("template: {},", self.template_expr()))
                .when(self.spec.isolated, |b| b.line("isolated: true,"))
                .block_with_close("init: function () {", "}", |b| b)
        })
        .when(self.spec.global, |b| {
            b.blank().line(&format!(
                "Ractive.components.{} = {};",
                self.names.registration, class
            ))
        })
    }
}

impl GeneratedFile for ComponentDefinition<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("app")
            .join("scripts")
            .join("components")
            .join(format!("{}.js", self.names.file))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let b = CodeBuilder::javascript();
        let code = match self.load_method {
            LoadMethod::ScriptTags => b
                .line("/* global Ractive */")
                .line("'use strict';")
                .blank()
                .apply(|b| self.declaration(b)),
            LoadMethod::Amd => {
                let header = format!(
                    "define(['ractive', {}], function (Ractive, template) {{",
                    js_string(&format!("rv!components/{}", self.names.file))
                );
                b.block_with_close(&header, "});", |b| {
                    b.line("'use strict';")
                        .blank()
                        .apply(|b| self.declaration(b))
                        .blank()
                        .line(&format!("return {};", self.names.class))
                })
            }
            LoadMethod::Browserify => b
                .line("'use strict';")
                .blank()
                .line("var Ractive = require('ractive/ractive.runtime');")
                .blank()
                .apply(|b| self.declaration(b))
                .blank()
                .line(&format!("module.exports = {};", self.names.class)),
        };
        code.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(load_method: LoadMethod, spec: ComponentSpec) -> String {
        let names = ComponentNames::new(&spec.name);
        ComponentDefinition::new(load_method, &spec, &names).render()
    }

    #[test]
    fn test_script_tags_plain() {
        let js = render(LoadMethod::ScriptTags, ComponentSpec::new("foo"));

        assert!(js.contains("var Foo = Ractive.extend({\n"));
        assert!(js.contains("  template: '#component/foo-template',\n"));
        assert!(!js.contains("isolated"));
        assert!(!js.contains("Ractive.components"));
    }

    #[test]
    fn test_isolated_and_global() {
        let js = render(
            LoadMethod::ScriptTags,
            ComponentSpec::new("todo-item").isolated(true).global(true),
        );

        assert!(js.contains("  isolated: true,\n"));
        assert!(js.contains("Ractive.components.todoItem = TodoItem;"));
    }

    #[test]
    fn test_amd_wraps_in_define() {
        let js = render(LoadMethod::Amd, ComponentSpec::new("foo"));

        assert!(js.starts_with(
            "define(['ractive', 'rv!components/foo'], function (Ractive, template) {\n"
        ));
        assert!(js.contains("    template: template,\n"));
        assert!(js.contains("  return Foo;\n"));
    }

    #[test]
    fn test_browserify_requires_runtime() {
        let js = render(LoadMethod::Browserify, ComponentSpec::new("foo"));

        assert!(js.contains("var Ractive = require('ractive/ractive.runtime');"));
        assert!(js.contains("template: require('./foo.ract'),"));
        assert!(js.ends_with("module.exports = Foo;\n"));
    }

    #[test]
    fn test_component_files_are_created_once() {
        let spec = ComponentSpec::new("foo");
        let names = ComponentNames::new("foo");
        let definition = ComponentDefinition::new(LoadMethod::Amd, &spec, &names);
        assert_eq!(definition.rules(), FileRules::create_once());
    }
}
