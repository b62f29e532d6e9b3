//! Scripted `CampaignApi` for page and driver tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::api::{CampaignApi, FetchError, MockDataSource};
use super::types::{Campaign, CampaignAnalytics, Judgement, ResearchPaper, Survey, Variant};

/// Operations that should reject instead of returning fixtures.
#[derive(Clone, Copy, Debug, Default)]
pub struct Faults {
    pub campaigns: bool,
    pub variants: bool,
    pub analytics: bool,
    pub judgements: bool,
    pub surveys: bool,
    pub papers: bool,
}

/// Fixture-backed API with injectable faults and a call log.
#[derive(Default)]
pub struct ScriptedApi {
    pub faults: Faults,
    /// Replaces the fixture campaign list when set.
    pub campaigns: Option<Vec<Campaign>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedApi {
    pub fn failing(faults: Faults) -> Self {
        Self { faults, ..Self::default() }
    }

    pub fn with_campaigns(campaigns: Vec<Campaign>) -> Self {
        Self { campaigns: Some(campaigns), ..Self::default() }
    }

    /// `"op:arg"` entries in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: &str, arg: &str) {
        self.calls.borrow_mut().push(format!("{op}:{arg}"));
    }
}

fn fixtures() -> MockDataSource {
    MockDataSource::immediate()
}

#[async_trait(?Send)]
impl CampaignApi for ScriptedApi {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, FetchError> {
        self.record("campaigns", "");
        if self.faults.campaigns {
            return Err(FetchError::rejected("campaigns", "scripted"));
        }
        match &self.campaigns {
            Some(list) => Ok(list.clone()),
            None => fixtures().list_campaigns().await,
        }
    }

    async fn list_variants(&self, campaign_id: &str) -> Result<Vec<Variant>, FetchError> {
        self.record("variants", campaign_id);
        if self.faults.variants {
            return Err(FetchError::rejected("variants", "scripted"));
        }
        fixtures().list_variants(campaign_id).await
    }

    async fn campaign_analytics(&self, campaign_id: &str) -> Result<CampaignAnalytics, FetchError> {
        self.record("analytics", campaign_id);
        if self.faults.analytics {
            return Err(FetchError::rejected("analytics", "scripted"));
        }
        fixtures().campaign_analytics(campaign_id).await
    }

    async fn list_judgements(&self, campaign_id: &str) -> Result<Vec<Judgement>, FetchError> {
        self.record("judgements", campaign_id);
        if self.faults.judgements {
            return Err(FetchError::rejected("judgements", "scripted"));
        }
        fixtures().list_judgements(campaign_id).await
    }

    async fn list_surveys(&self, campaign_id: &str) -> Result<Vec<Survey>, FetchError> {
        self.record("surveys", campaign_id);
        if self.faults.surveys {
            return Err(FetchError::rejected("surveys", "scripted"));
        }
        fixtures().list_surveys(campaign_id).await
    }

    async fn list_papers(&self) -> Result<Vec<ResearchPaper>, FetchError> {
        self.record("papers", "");
        if self.faults.papers {
            return Err(FetchError::rejected("papers", "scripted"));
        }
        fixtures().list_papers().await
    }

    async fn get_paper(&self, id: &str) -> Result<ResearchPaper, FetchError> {
        self.record("paper", id);
        if self.faults.papers {
            return Err(FetchError::rejected("paper", "scripted"));
        }
        fixtures().get_paper(id).await
    }
}
