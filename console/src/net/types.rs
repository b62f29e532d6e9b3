//! Entity records exchanged with the data collaborator.
//!
//! DESIGN
//! ======
//! Records are plain serde structs with no lifecycle of their own: a page
//! fetches them, holds them in its state for as long as it is mounted, and
//! drops them on navigation. Closed enumerations replace free-form strings
//! wherever the UI dispatches on a value (campaign status, judge kind).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A record that can be selected by id in a parent list.
pub trait Entity {
    fn id(&self) -> &str;
}

/// Lifecycle status of a marketing campaign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 4] = [Self::Draft, Self::Active, Self::Paused, Self::Completed];

    /// Wire name, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    /// Capitalized label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Top-level selectable record that drives dependent fetches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: CampaignStatus,
    /// Budget in whole dollars.
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub target_audience: Option<String>,
}

impl Entity for Campaign {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One copy variant under A/B test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub campaign_id: String,
    pub headline: String,
    /// Click-through rate in percent (e.g. `3.2` means 3.2%).
    pub ctr: f64,
}

/// Aggregate A/B analytics for one campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignAnalytics {
    pub campaign_id: String,
    pub score: f64,
    /// Relative lift of the best variant, in percent.
    #[serde(default)]
    pub lift: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Who produced a judgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgeKind {
    AiBot,
    Human,
}

/// A scored review of a campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Judgement {
    pub id: String,
    pub campaign_id: String,
    #[serde(rename = "judge_type")]
    pub judge: JudgeKind,
    pub score: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// A human feedback survey attached to a campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    pub campaign_id: String,
    pub respondents: u32,
    #[serde(default)]
    pub question: Option<String>,
}

/// Reproducible experiment parameters attached to a research paper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub model_name: String,
    pub dataset: String,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub hyperparameters: BTreeMap<String, f64>,
}

/// A published research write-up with optional experiment metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResearchPaper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    /// RFC 3339 creation timestamp.
    pub created_date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Markdown body.
    pub content: String,
    #[serde(default)]
    pub experiment_config: Option<ExperimentConfig>,
    #[serde(default)]
    pub reproducibility_artifacts: Vec<String>,
}

impl Entity for ResearchPaper {
    fn id(&self) -> &str {
        &self.id
    }
}
