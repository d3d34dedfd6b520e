//! Catalog entries for visual inspection of the button.
//!
//! A [`Catalog`] holds the component [`Meta`] (title, layout, tags and the
//! default arguments every story starts from) and a list of named [`Story`]
//! entries. Rendering a story layers its arguments over the defaults and binds
//! the catalog's [`ClickSpy`] as the click handler.
//!
//! The harness that displays stories lives outside this crate; it consumes
//! [`Catalog::render_story`], [`Catalog::render_story_html`] and
//! [`Catalog::index_json`].

mod spy;

pub use spy::ClickSpy;

use serde::Serialize;
use thiserror::Error;

use crate::button::{ButtonArgs, InteractiveElement, MarkupRenderer};
use crate::error::{ConfigError, RenderError};

/// Error returned by catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown story '{0}'")]
    UnknownStory(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to serialize catalog index: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// How the harness positions the component in its canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Centered,
    Padded,
    Fullscreen,
}

/// Component-level catalog metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub title: String,
    pub component: String,
    pub layout: Layout,
    pub tags: Vec<String>,
    /// Arguments every story starts from. The click handler is always the
    /// catalog's spy and is not part of the serialized arguments.
    pub args: ButtonArgs,
}

/// A named set of arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub name: String,
    pub args: ButtonArgs,
}

impl Story {
    pub fn new(name: impl Into<String>, args: ButtonArgs) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

#[derive(Serialize)]
struct IndexEntry<'c> {
    id: String,
    name: &'c str,
    args: ButtonArgs,
}

#[derive(Serialize)]
struct Index<'c> {
    meta: &'c Meta,
    stories: Vec<IndexEntry<'c>>,
}

/// Catalog of button stories bound to a shared click spy.
#[derive(Debug)]
pub struct Catalog {
    meta: Meta,
    stories: Vec<Story>,
    spy: ClickSpy,
}

impl Catalog {
    pub fn new(meta: Meta) -> Self {
        Self {
            meta,
            stories: Vec::new(),
            spy: ClickSpy::new(),
        }
    }

    /// The button catalog: `Solid` and `Outlined` stories labeled "Button".
    pub fn button() -> Self {
        let meta = Meta {
            title: "Button".to_string(),
            component: "Button".to_string(),
            layout: Layout::Centered,
            tags: vec!["autodocs".to_string()],
            args: ButtonArgs::default(),
        };
        Catalog::new(meta)
            .story(Story::new("Solid", story_args("solid")))
            .story(Story::new("Outlined", story_args("outlined")))
    }

    /// Adds a story, returning the catalog for chaining.
    pub fn story(mut self, story: Story) -> Self {
        self.stories.push(story);
        self
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn stories(&self) -> impl Iterator<Item = &Story> {
        self.stories.iter()
    }

    pub fn spy(&self) -> &ClickSpy {
        &self.spy
    }

    /// Identifier of a story, e.g. `button--solid`.
    pub fn story_id(&self, name: &str) -> String {
        format!("{}--{}", slug(&self.meta.title), slug(name))
    }

    /// Looks up a story by name.
    pub fn get(&self, name: &str) -> Result<&Story, CatalogError> {
        self.stories
            .iter()
            .find(|story| story.name == name)
            .ok_or_else(|| CatalogError::UnknownStory(name.to_string()))
    }

    /// Default arguments with the story's arguments layered on top.
    pub fn story_args(&self, name: &str) -> Result<ButtonArgs, CatalogError> {
        let story = self.get(name)?;
        Ok(self.meta.args.clone().merge(story.args.clone()))
    }

    /// Renders a story with the spy as its click handler.
    pub fn render_story(&self, name: &str) -> Result<InteractiveElement<'_>, CatalogError> {
        let config = self
            .story_args(name)?
            .into_config(Some(self.spy.handler()))?;
        tracing::debug!(story = %self.story_id(name), "rendering story");
        Ok(crate::button::render(config)?)
    }

    /// Renders a story to HTML.
    pub fn render_story_html(&self, name: &str) -> Result<String, CatalogError> {
        let element = self.render_story(name)?;
        Ok(MarkupRenderer::shared()?.to_html(&element)?)
    }

    /// Serializes the metadata and every story, for documentation tooling.
    pub fn index_json(&self) -> Result<String, CatalogError> {
        let mut stories = Vec::with_capacity(self.stories.len());
        for story in &self.stories {
            stories.push(IndexEntry {
                id: self.story_id(&story.name),
                name: &story.name,
                args: self.story_args(&story.name)?,
            });
        }
        let index = Index {
            meta: &self.meta,
            stories,
        };
        Ok(serde_json::to_string_pretty(&index)?)
    }
}

fn story_args(variant: &str) -> ButtonArgs {
    ButtonArgs {
        variant: Some(variant.to_string()),
        label: Some("Button".to_string()),
        ..ButtonArgs::default()
    }
}

fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
