//! Agent definitions — persona, prompt context, language, and tools
//!
//! An agent is a conversational persona bound to a route. The definition
//! carries everything the hosting runtime needs: prompt sections for the
//! conversational model, the language/voice to speak with, and the tool
//! registry to dispatch into.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::tools::{ToolHandler, ToolRegistry};

pub mod gateway;
pub mod orders;
pub mod support;

pub use gateway::gateway_agent;
pub use orders::orders_agent;
pub use support::support_agent;

/// One section of an agent's prompt context: either prose or bullets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSection {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
}

/// Language and voice the speech runtime uses for this agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub code: String,
    pub voice: String,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            name: "English".to_string(),
            code: "en-US".to_string(),
            voice: "rime.spore".to_string(),
        }
    }
}

/// A conversational agent bound to a route
pub struct AgentDefinition {
    name: String,
    route: String,
    prompt: Vec<PromptSection>,
    language: Language,
    tools: ToolRegistry,
}

impl AgentDefinition {
    pub fn new(name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            prompt: Vec::new(),
            language: Language::default(),
            tools: ToolRegistry::new(),
        }
    }

    /// Add a prose prompt section
    pub fn prompt_section(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.prompt.push(PromptSection {
            title: title.into(),
            body: Some(body.into()),
            bullets: Vec::new(),
        });
        self
    }

    /// Add a bulleted prompt section
    pub fn prompt_bullets(mut self, title: impl Into<String>, bullets: Vec<String>) -> Self {
        self.prompt.push(PromptSection {
            title: title.into(),
            body: None,
            bullets,
        });
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Register a tool on this agent
    pub fn tool(mut self, handler: Arc<dyn ToolHandler>) -> Self {
        self.tools.register(handler);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The agent's name without the `-agent` suffix, for listings
    pub fn short_name(&self) -> &str {
        self.name.strip_suffix("-agent").unwrap_or(&self.name)
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn prompt(&self) -> &[PromptSection] {
        &self.prompt
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Serializable description of this agent for the hosting runtime
    pub fn card(&self) -> AgentCard {
        AgentCard {
            name: self.name.clone(),
            route: self.route.clone(),
            language: self.language.clone(),
            prompt: self.prompt.clone(),
        }
    }
}

/// Wire-facing agent description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCard {
    pub name: String,
    pub route: String,
    pub language: Language,
    pub prompt: Vec<PromptSection>,
}
