//! Data collaborator standing in for the campaign backend.
//!
//! Client-side (hydrate): fixtures resolve after a short simulated latency so
//! loading skeletons are visible. Server-side (SSR) and tests: fixtures
//! resolve immediately.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, FetchError>`. Pages never see a panic
//! from this layer; a rejected fetch is the only failure kind in the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::types::{
    Campaign, CampaignAnalytics, CampaignStatus, ExperimentConfig, JudgeKind, Judgement, ResearchPaper, Survey,
    Variant,
};

/// Id used by the paper view when the URL carries no `?id=`.
pub const SAMPLE_PAPER_ID: &str = "sample";

#[cfg(feature = "hydrate")]
const DEFAULT_LATENCY_MS: u64 = 250;
#[cfg(not(feature = "hydrate"))]
const DEFAULT_LATENCY_MS: u64 = 0;

/// A rejected asynchronous data operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("{resource} request rejected: {reason}")]
    Rejected { resource: &'static str, reason: String },
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },
}

impl FetchError {
    pub fn rejected(resource: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected { resource, reason: reason.into() }
    }
}

/// Campaign backend surface consumed by page controllers.
///
/// `?Send` because the browser runtime is single-threaded and the futures
/// hold `!Send` browser handles under `hydrate`.
#[async_trait(?Send)]
pub trait CampaignApi {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, FetchError>;
    async fn list_variants(&self, campaign_id: &str) -> Result<Vec<Variant>, FetchError>;
    async fn campaign_analytics(&self, campaign_id: &str) -> Result<CampaignAnalytics, FetchError>;
    async fn list_judgements(&self, campaign_id: &str) -> Result<Vec<Judgement>, FetchError>;
    async fn list_surveys(&self, campaign_id: &str) -> Result<Vec<Survey>, FetchError>;
    async fn list_papers(&self) -> Result<Vec<ResearchPaper>, FetchError>;
    async fn get_paper(&self, id: &str) -> Result<ResearchPaper, FetchError>;
}

/// In-memory fixtures shaped like the production backend responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockDataSource {
    pub latency_ms: u64,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self { latency_ms: DEFAULT_LATENCY_MS }
    }
}

impl MockDataSource {
    /// Fixtures with no simulated latency.
    #[must_use]
    pub fn immediate() -> Self {
        Self { latency_ms: 0 }
    }

    async fn settle(&self) {
        #[cfg(feature = "hydrate")]
        {
            if self.latency_ms > 0 {
                gloo_timers::future::sleep(std::time::Duration::from_millis(self.latency_ms)).await;
            }
        }
    }
}

#[async_trait(?Send)]
impl CampaignApi for MockDataSource {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, FetchError> {
        self.settle().await;
        Ok(vec![
            Campaign {
                id: "c1".to_owned(),
                name: "Autumn Launch".to_owned(),
                status: CampaignStatus::Active,
                budget: 25_000.0,
                target_audience: Some("Gen Z".to_owned()),
            },
            Campaign {
                id: "c2".to_owned(),
                name: "Holiday Promo".to_owned(),
                status: CampaignStatus::Draft,
                budget: 15_000.0,
                target_audience: Some("Families".to_owned()),
            },
        ])
    }

    async fn list_variants(&self, campaign_id: &str) -> Result<Vec<Variant>, FetchError> {
        self.settle().await;
        Ok(vec![
            Variant {
                id: "v1".to_owned(),
                campaign_id: campaign_id.to_owned(),
                headline: "Save Big Today".to_owned(),
                ctr: 3.2,
            },
            Variant {
                id: "v2".to_owned(),
                campaign_id: campaign_id.to_owned(),
                headline: "Limited Time Offer".to_owned(),
                ctr: 4.1,
            },
        ])
    }

    async fn campaign_analytics(&self, campaign_id: &str) -> Result<CampaignAnalytics, FetchError> {
        self.settle().await;
        Ok(CampaignAnalytics {
            campaign_id: campaign_id.to_owned(),
            score: 82.0,
            lift: 12.0,
            recommendations: vec!["Test stronger CTA".to_owned(), "Add urgency".to_owned()],
        })
    }

    async fn list_judgements(&self, campaign_id: &str) -> Result<Vec<Judgement>, FetchError> {
        self.settle().await;
        Ok(vec![Judgement {
            id: "j1".to_owned(),
            campaign_id: campaign_id.to_owned(),
            judge: JudgeKind::AiBot,
            score: 78.0,
            recommendations: Vec::new(),
        }])
    }

    async fn list_surveys(&self, campaign_id: &str) -> Result<Vec<Survey>, FetchError> {
        self.settle().await;
        Ok(vec![Survey {
            id: "s1".to_owned(),
            campaign_id: campaign_id.to_owned(),
            respondents: 120,
            question: None,
        }])
    }

    async fn list_papers(&self) -> Result<Vec<ResearchPaper>, FetchError> {
        self.settle().await;
        Ok(vec![sample_paper(SAMPLE_PAPER_ID)])
    }

    async fn get_paper(&self, id: &str) -> Result<ResearchPaper, FetchError> {
        self.settle().await;
        if id.trim().is_empty() {
            return Err(FetchError::NotFound { resource: "research paper", id: id.to_owned() });
        }
        Ok(sample_paper(id))
    }
}

fn sample_paper(id: &str) -> ResearchPaper {
    ResearchPaper {
        id: id.to_owned(),
        title: "Sample Research Paper".to_owned(),
        authors: vec!["Jane Doe".to_owned(), "John Smith".to_owned()],
        created_date: chrono::Utc::now().to_rfc3339(),
        tags: vec!["AI".to_owned(), "Marketing".to_owned()],
        abstract_text: "This paper explores AI-driven campaign optimization techniques.".to_owned(),
        content: "# Introduction\n\nThis is a placeholder markdown body for the research paper.".to_owned(),
        experiment_config: Some(ExperimentConfig {
            model_name: "gpt-4-class".to_owned(),
            dataset: "ad_variants_v2".to_owned(),
            metrics: BTreeMap::from([("accuracy".to_owned(), 0.91), ("f1".to_owned(), 0.88)]),
            hyperparameters: BTreeMap::from([("temperature".to_owned(), 0.7), ("top_p".to_owned(), 0.9)]),
        }),
        reproducibility_artifacts: vec!["dataset".to_owned(), "hyperparameters".to_owned()],
    }
}
