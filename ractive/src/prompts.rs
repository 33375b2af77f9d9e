//! Interactive questions for the project generator.

use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use ractive_gen_config::{Answers, Feature, LoadMethod, Router};

/// Ask every project question in order.
///
/// `default_name` pre-fills the project name prompt.
pub fn ask_answers(default_name: &str) -> Result<Answers> {
    let theme = ColorfulTheme::default();

    let project: String = Input::with_theme(&theme)
        .with_prompt("What's the name of your project?")
        .default(default_name.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("project name must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .wrap_err("Failed to get project name")?;

    let router = Confirm::with_theme(&theme)
        .with_prompt("Would you like to include a router?")
        .default(false)
        .interact()
        .wrap_err("Failed to get router choice")?;

    let included_router = if router {
        let labels: Vec<_> = Router::ALL.iter().map(Router::label).collect();
        let selection = Select::with_theme(&theme)
            .with_prompt("Which router would you like to use?")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get router selection")?;
        Some(Router::ALL[selection])
    } else {
        None
    };

    let labels: Vec<_> = LoadMethod::ALL.iter().map(LoadMethod::label).collect();
    let selection = Select::with_theme(&theme)
        .with_prompt("How would you like to load your scripts?")
        .items(&labels)
        .default(0)
        .interact()
        .wrap_err("Failed to get load method")?;
    let load_method = LoadMethod::ALL[selection];

    let labels: Vec<_> = Feature::ALL.iter().map(Feature::label).collect();
    let features: Vec<Feature> = MultiSelect::with_theme(&theme)
        .with_prompt("What more would you like? (space to toggle)")
        .items(&labels)
        .interact()
        .wrap_err("Failed to get features")?
        .into_iter()
        .map(|i| Feature::ALL[i])
        .collect();

    let libsass = if features.contains(&Feature::Sass) {
        Confirm::with_theme(&theme)
            .with_prompt("Would you like to use libsass? Read up more at https://github.com/andrew/node-sass")
            .default(false)
            .interact()
            .wrap_err("Failed to get Sass engine")?
    } else {
        false
    };

    Ok(Answers {
        project: project.trim().to_string(),
        router,
        included_router,
        load_method,
        features,
        libsass,
    })
}
